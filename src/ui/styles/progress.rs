// SPDX-License-Identifier: MPL-2.0
//! Progress bar styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::progress_bar;
use iced::{Background, Border, Theme};

/// Brand-colored bar used for the analysis run.
pub fn brand(theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(theme.extended_palette().background.weak.color),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}

/// Bar for the confidence score of a result.
pub fn confidence(theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        bar: Background::Color(palette::SUCCESS_500),
        ..brand(theme)
    }
}
