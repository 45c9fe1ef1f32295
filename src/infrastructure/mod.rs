// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! - [`fixed_analyzer`]: Returns the same reference dish for every image
//!   (implements [`NutritionAnalyzer`])
//!
//! [`NutritionAnalyzer`]: crate::application::port::NutritionAnalyzer

pub mod fixed_analyzer;

pub use fixed_analyzer::FixedAnalyzer;
