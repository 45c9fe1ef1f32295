// SPDX-License-Identifier: MPL-2.0
//! Top bar with the app title, the AI badge and the language/theme controls.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{button, container, Container, Row, Space, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeToggled,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: Message, current_theme: ThemeMode) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeToggled => Event::ThemeModeChanged(current_theme.next()),
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("header-title"))
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_600);

    let badge = Container::new(Text::new(ctx.i18n.tr("header-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge);

    let current = ctx.i18n.current_locale();
    let mut languages = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for locale in ctx.i18n.available_locales() {
        let label = ctx.i18n.tr(&format!("language-name-{locale}"));
        let style = if locale == current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        languages = languages.push(
            button(Text::new(label).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(style)
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    let theme_toggle = button(Text::new(ctx.i18n.tr(ctx.theme_mode.i18n_key())).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::ThemeToggled);

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(badge)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.i18n.tr("header-language-label")).size(typography::BODY_SM))
        .push(languages)
        .push(theme_toggle);

    container(bar)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_WIDTH)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::panel)
        .into()
}
