// SPDX-License-Identifier: MPL-2.0
//! Footer tagline and badges.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{Element, Length};

const BADGE_KEYS: [&str; 3] = [
    "footer-badge-secure",
    "footer-badge-fast",
    "footer-badge-accurate",
];

pub fn view<'a, M: 'a>(i18n: &'a I18n) -> Element<'a, M> {
    let badges = BADGE_KEYS.iter().fold(Row::new().spacing(spacing::MD), |row, key| {
        row.push(
            Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::outline_badge),
        )
    });

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("footer-tagline"))
                .size(typography::BODY_SM)
                .style(text::secondary),
        )
        .push(badges);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
}
