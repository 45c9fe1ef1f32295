// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The hero is always shown. Below it comes the upload card until a result
//! is available, then the results view. Toasts are stacked on top.

use super::Message;
use crate::domain::session::Session;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{footer, header, hero, results, upload};
use iced::alignment::Horizontal;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub progress: f32,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

/// Page sections between the header and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Hero,
    Upload,
    Results,
}

/// Sections shown for the current session, top to bottom.
fn sections(session: &Session) -> &'static [Section] {
    if session.result().is_some() {
        &[Section::Hero, Section::Results]
    } else {
        &[Section::Hero, Section::Upload]
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let header = header::view(header::ViewContext {
        i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let main = sections(ctx.session).iter().fold(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center),
        |column, section| match section {
            Section::Hero => column.push(hero::view(i18n)),
            Section::Upload => column.push(
                upload::view(upload::ViewContext {
                    i18n,
                    session: ctx.session,
                    progress: ctx.progress,
                })
                .map(Message::Upload),
            ),
            Section::Results => match (ctx.session.selected_file(), ctx.session.result()) {
                (Some(image), Some(result)) => column.push(
                    results::view(results::ViewContext { i18n, image, result })
                        .map(Message::Results),
                ),
                _ => column,
            },
        },
    );

    let page = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .push(header)
        .push(main)
        .push(footer::view(i18n));

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(scrollable(page))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}
