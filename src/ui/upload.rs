// SPDX-License-Identifier: MPL-2.0
//! Upload card: drop zone, file selection and the analyze controls.
//!
//! The card shows one of three bodies depending on the session:
//! - no file: drop hint, "Choose file" button and the accepted formats
//! - file selected: file name with Analyze and Reset buttons
//! - analyzing: the same, plus a progress bar and a Cancel button beside Reset

use crate::domain::intake::ImageKind;
use crate::domain::session::Session;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, progress_bar, text, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the upload card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    /// Completed fraction of the running analysis, `0.0..=1.0`.
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ChooseFile,
    Analyze,
    Reset,
    Cancel,
}

/// Comma separated labels of every accepted format.
#[must_use]
pub fn formats_label() -> String {
    ImageKind::ALL
        .iter()
        .map(|kind| kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let header = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("upload-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("upload-description"))
                .size(typography::BODY)
                .style(text::secondary),
        );

    let body = match ctx.session.selected_file() {
        Some(image) => selected_body(i18n, image.file_name(), ctx.session.is_analyzing()),
        None => empty_body(i18n, ctx.session.drag_active()),
    };

    let drop_zone = Container::new(body)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(styles::container::drop_zone(ctx.session.drag_active()));

    let mut card = Column::new()
        .spacing(spacing::LG)
        .push(header)
        .push(drop_zone);

    if ctx.session.is_analyzing() {
        card = card.push(progress_section(i18n, ctx.progress));
    }

    Container::new(card)
        .width(Length::Fill)
        .max_width(sizing::UPLOAD_CARD_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn empty_body(i18n: &I18n, drag_active: bool) -> Element<'_, Message> {
    let hint_key = if drag_active {
        "upload-drop-active"
    } else {
        "upload-drop-hint"
    };

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new("⇪")
                .size(sizing::ICON_XL)
                .color(palette::GRAY_300),
        )
        .push(Text::new(i18n.tr(hint_key)).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("upload-choose-button")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::ChooseFile),
        )
        .push(
            Text::new(i18n.tr_with_args("upload-formats", &[("formats", &formats_label())]))
                .size(typography::CAPTION)
                .style(text::secondary),
        )
        .into()
}

fn selected_body<'a>(i18n: &'a I18n, file_name: &str, analyzing: bool) -> Element<'a, Message> {
    let analyze_label = if analyzing {
        i18n.tr("upload-analyzing-button")
    } else {
        i18n.tr("upload-analyze-button")
    };
    let analyze = button(Text::new(analyze_label))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe((!analyzing).then_some(Message::Analyze));

    let actions = secondary_actions(analyzing).iter().fold(
        Row::new().spacing(spacing::SM).push(analyze),
        |row, &(key, message)| {
            row.push(
                button(Text::new(i18n.tr(key)))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::outline)
                    .on_press(message),
            )
        },
    );

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("✓").size(sizing::ICON_XL).color(palette::SUCCESS_500))
        .push(
            Text::new(i18n.tr_with_args("upload-selected-file", &[("name", file_name)]))
                .size(typography::BODY),
        )
        .push(actions.align_y(Vertical::Center))
        .into()
}

/// Buttons shown next to Analyze. Reset stays available while analyzing.
fn secondary_actions(analyzing: bool) -> &'static [(&'static str, Message)] {
    if analyzing {
        &[
            ("upload-cancel-button", Message::Cancel),
            ("upload-reset-button", Message::Reset),
        ]
    } else {
        &[("upload-reset-button", Message::Reset)]
    }
}

fn progress_section(i18n: &I18n, progress: f32) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new("●").color(palette::PRIMARY_500))
                .push(Text::new(i18n.tr("upload-progress")).size(typography::BODY)),
        )
        .push(
            progress_bar(0.0..=1.0, progress.clamp(0.0, 1.0))
                .girth(sizing::PROGRESS_HEIGHT)
                .style(styles::progress::brand),
        )
        .into()
}
