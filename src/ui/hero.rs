// SPDX-License-Identifier: MPL-2.0
//! Introductory heading above the upload card.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{text, Column, Container, Row, Text};
use iced::{Element, Length};

const FEATURE_KEYS: [&str; 3] = [
    "hero-feature-neural",
    "hero-feature-instant",
    "hero-feature-accurate",
];

pub fn view<'a, M: 'a>(i18n: &'a I18n) -> Element<'a, M> {
    let title = Text::new(i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .align_x(Horizontal::Center);
    let accent = Text::new(i18n.tr("hero-accent"))
        .size(typography::DISPLAY)
        .color(palette::PRIMARY_500);
    let subtitle = Text::new(i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center)
        .style(text::secondary);

    let features = FEATURE_KEYS.iter().fold(
        Row::new().spacing(spacing::LG).align_y(Vertical::Center),
        |row, key| {
            row.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(Text::new("●").color(palette::PRIMARY_500))
                    .push(Text::new(i18n.tr(key)).size(typography::BODY)),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(title)
        .push(accent)
        .push(subtitle)
        .push(features);

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .align_x(Horizontal::Center)
        .into()
}
