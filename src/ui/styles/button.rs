// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (Analyze).
///
/// The disabled state keeps the brand hue, faded, so "Analyzing…" still
/// reads as the main action while a run is in flight.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: 0.6,
                ..palette::PRIMARY_500
            },
            palette::PRIMARY_400,
            shadow::NONE,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Outlined brand button (Choose file, New analysis).
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let border = Border {
        color: palette::PRIMARY_500,
        width: 1.0,
        radius: radius::MD.into(),
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette::PRIMARY_600,
            border,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border,
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                ..border
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for the selected entry of a toggle group (language picker).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            radius: radius::FULL.into(),
            ..primary(theme, status).border
        },
        ..primary(theme, status)
    }
}

/// Style for unselected entries of a toggle group.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_faded() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(bg)) => assert!(bg.a < 1.0),
            other => panic!("Expected background color, got {other:?}"),
        }
    }

    #[test]
    fn outline_fills_on_hover() {
        let theme = Theme::Light;
        assert!(outline(&theme, button::Status::Active).background.is_none());
        assert!(outline(&theme, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn unselected_highlights_border_on_hover() {
        let theme = Theme::Light;
        let hovered = unselected(&theme, button::Status::Hovered);
        assert_eq!(hovered.border.color, palette::PRIMARY_500);
    }
}
