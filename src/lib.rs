// SPDX-License-Identifier: MPL-2.0
//! `plate_lens` estimates the nutrition of a dish from a photo, built with
//! the Iced GUI framework.
//!
//! The user picks or drops an image, starts an analysis and, after a short
//! delay, sees the calories, macronutrients and an ingredient breakdown.
//! The analysis itself sits behind the
//! [`NutritionAnalyzer`](application::port::NutritionAnalyzer) port.

pub mod analysis;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
