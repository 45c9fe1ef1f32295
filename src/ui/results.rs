// SPDX-License-Identifier: MPL-2.0
//! Results view: dish preview, calorie total, macro tiles and the
//! per-ingredient breakdown.

use crate::domain::intake::SelectedImage;
use crate::domain::nutrition::AnalysisResult;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, image, progress_bar, rule, text, Column, Container, Row, Space, Text,
};
use iced::{Color, ContentFit, Element, Length};

/// Contextual data needed to render the results.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: &'a SelectedImage,
    pub result: &'a AnalysisResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NewAnalysis,
}

/// Localized dish name, or the raw identifier when no translation exists.
#[must_use]
pub fn dish_label(i18n: &I18n, dish: &str) -> String {
    i18n.try_tr(&format!("dish-{dish}"))
        .unwrap_or_else(|| dish.to_string())
}

/// Localized ingredient name, or the raw identifier when no translation exists.
#[must_use]
pub fn ingredient_label(i18n: &I18n, ingredient: &str) -> String {
    i18n.try_tr(&format!("ingredient-{ingredient}"))
        .unwrap_or_else(|| ingredient.to_string())
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let title_row = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("results-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(format!("↺ {}", i18n.tr("results-new-analysis"))))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::outline)
                .on_press(Message::NewAnalysis),
        );

    let summary = Row::new()
        .spacing(spacing::LG)
        .push(preview_column(&ctx))
        .push(nutrition_column(&ctx));

    let summary_card = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(title_row)
            .push(summary),
    )
    .padding(spacing::LG)
    .style(styles::container::panel);

    let breakdown_card = Container::new(breakdown(i18n, ctx.result))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel);

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_WIDTH)
        .push(summary_card)
        .push(breakdown_card)
        .into()
}

fn preview_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let preview = image(image::Handle::from_path(ctx.image.path()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .content_fit(ContentFit::Cover);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .align_x(Horizontal::Center)
        .push(preview)
        .push(Text::new(dish_label(ctx.i18n, &ctx.result.dish)).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "results-portion",
                &[("grams", &ctx.result.portion_g.to_string())],
            ))
            .size(typography::BODY_SM)
            .style(text::secondary),
        )
        .into()
}

fn nutrition_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let result = ctx.result;

    let calories = Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .push(Text::new(result.calories_kcal.to_string()).size(typography::DISPLAY))
            .push(Text::new(i18n.tr("results-calories")).size(typography::BODY_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .style(styles::container::calorie_total);

    let tiles = Row::new()
        .spacing(spacing::SM)
        .push(macro_tile(
            i18n,
            "results-protein",
            result.macros.protein_g,
            palette::PROTEIN_500,
        ))
        .push(macro_tile(
            i18n,
            "results-fat",
            result.macros.fat_g,
            palette::FAT_500,
        ))
        .push(macro_tile(
            i18n,
            "results-carbohydrates",
            result.macros.carbohydrates_g,
            palette::CARBOHYDRATES_500,
        ));

    let confidence = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .push(Text::new(i18n.tr("results-confidence")).size(typography::BODY_SM))
                .push(Space::new().width(Length::Fill))
                .push(
                    Text::new(i18n.tr_with_args(
                        "results-confidence-value",
                        &[("percent", &result.confidence.value().to_string())],
                    ))
                    .size(typography::BODY_SM)
                    .color(palette::SUCCESS_500),
                ),
        )
        .push(
            progress_bar(0.0..=1.0, result.confidence.as_fraction())
                .girth(sizing::PROGRESS_HEIGHT)
                .style(styles::progress::confidence),
        );

    Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(1))
        .push(calories)
        .push(tiles)
        .push(confidence)
        .into()
}

fn macro_tile<'a>(i18n: &'a I18n, label_key: &str, grams: u32, accent: Color) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr_with_args("results-grams", &[("grams", &grams.to_string())]))
                    .size(typography::TITLE_SM),
            )
            .push(Text::new(i18n.tr(label_key)).size(typography::CAPTION)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .align_x(Horizontal::Center)
    .style(styles::container::macro_tile(accent))
    .into()
}

fn breakdown<'a>(i18n: &'a I18n, result: &'a AnalysisResult) -> Element<'a, Message> {
    let rows = result.items.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("results-breakdown-title")).size(typography::TITLE_SM)),
        |column, item| {
            let name = i18n.tr_with_args(
                "results-line-item",
                &[
                    ("name", &ingredient_label(i18n, &item.ingredient)),
                    ("grams", &item.weight_g.to_string()),
                ],
            );
            let kcal = i18n.tr_with_args(
                "results-line-item-kcal",
                &[("kcal", &item.calories_kcal.to_string())],
            );
            column
                .push(
                    Row::new()
                        .padding([spacing::XS, 0.0])
                        .push(Text::new(name).size(typography::BODY))
                        .push(Space::new().width(Length::Fill))
                        .push(Text::new(kcal).size(typography::BODY)),
                )
                .push(rule::horizontal(1))
        },
    );

    let (total, total_kcal) = total_row_text(i18n, result);
    rows.push(
        Row::new()
            .padding([spacing::XS, 0.0])
            .push(Text::new(total).size(typography::BODY_LG))
            .push(Space::new().width(Length::Fill))
            .push(
                Text::new(total_kcal)
                    .size(typography::BODY_LG)
                    .color(palette::PRIMARY_500),
            ),
    )
    .into()
}

/// Label and calorie text of the row summing the line items.
fn total_row_text(i18n: &I18n, result: &AnalysisResult) -> (String, String) {
    (
        i18n.tr_with_args(
            "results-total",
            &[("grams", &result.itemized_weight_g().to_string())],
        ),
        i18n.tr_with_args(
            "results-line-item-kcal",
            &[("kcal", &result.itemized_calories().to_string())],
        ),
    )
}
