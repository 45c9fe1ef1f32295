// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`analyzer`]: Nutrition analysis of a selected image
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Traits are `Send + Sync` so adapters can be shared with async tasks
//! - No `async fn` - scheduling lives in [`crate::analysis`]

pub mod analyzer;

pub use analyzer::{AnalysisError, NutritionAnalyzer};
