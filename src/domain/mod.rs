// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`intake`]: Accepted images ([`ImageKind`](intake::ImageKind),
//!   [`SelectedImage`](intake::SelectedImage))
//! - [`nutrition`]: Analysis results ([`AnalysisResult`](nutrition::AnalysisResult),
//!   [`Macros`](nutrition::Macros), [`ConfidencePercent`](nutrition::ConfidencePercent))
//! - [`session`]: The upload/analysis state machine ([`Session`](session::Session))

pub mod intake;
pub mod nutrition;
pub mod session;
