// SPDX-License-Identifier: MPL-2.0
//! Nutrition analysis port definition.
//!
//! This module defines the [`NutritionAnalyzer`] trait: the capability that
//! turns a selected photo into an [`AnalysisResult`]. The session state
//! machine never talks to an analyzer directly; the application hands the
//! analyzer to an [`AnalysisJob`](crate::analysis::AnalysisJob).
//!
//! # Design Notes
//!
//! - Calls are synchronous; the scheduling delay lives in the job
//! - The trait is `Send + Sync` so one instance can be shared via `Arc`

use crate::domain::intake::SelectedImage;
use crate::domain::nutrition::AnalysisResult;
use std::fmt;

// =============================================================================
// AnalysisError
// =============================================================================

/// Errors that can occur while analysing a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The analyzer cannot handle this image.
    UnsupportedImage,

    /// Analysis failed with an error message.
    Failed(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::UnsupportedImage => write!(f, "Image is not supported by the analyzer"),
            AnalysisError::Failed(msg) => write!(f, "Analysis failed: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

// =============================================================================
// NutritionAnalyzer Trait
// =============================================================================

/// Port for photo-to-nutrition analysis.
///
/// # Example
///
/// ```
/// use plate_lens::application::port::analyzer::NutritionAnalyzer;
/// use plate_lens::domain::intake::{ImageKind, SelectedImage};
/// use plate_lens::infrastructure::FixedAnalyzer;
///
/// let analyzer = FixedAnalyzer;
/// let image = SelectedImage::new("dinner.jpg", 2048, ImageKind::Jpeg);
/// let result = analyzer.analyze(&image).expect("fixed analyzer never fails");
/// assert_eq!(result.calories_kcal, 387);
/// ```
pub trait NutritionAnalyzer: Send + Sync {
    /// Short human-readable name of the analyzer, used in logs.
    fn name(&self) -> &'static str;

    /// Analyses `image`.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisError`] if the image is unsupported or the
    /// analysis fails.
    fn analyze(&self, image: &SelectedImage) -> Result<AnalysisResult, AnalysisError>;
}

impl fmt::Debug for dyn NutritionAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionAnalyzer")
            .field("name", &self.name())
            .finish()
    }
}
