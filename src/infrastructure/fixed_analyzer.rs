// SPDX-License-Identifier: MPL-2.0
//! Analyzer that always reports the same dish.
//!
//! No pixels are inspected: every photo is "recognised" as a chicken breast
//! with quinoa and vegetables. Swap in another [`NutritionAnalyzer`] to get
//! real numbers.

use crate::application::port::analyzer::{AnalysisError, NutritionAnalyzer};
use crate::domain::intake::SelectedImage;
use crate::domain::nutrition::{AnalysisResult, ConfidencePercent, LineItem, Macros};

/// Dish identifier of the fixed result.
pub const DISH: &str = "chicken-breast-with-vegetables";

/// Returns the fixed nutrition summary.
#[must_use]
pub fn fixed_result() -> AnalysisResult {
    AnalysisResult {
        dish: DISH.to_string(),
        portion_g: 300,
        calories_kcal: 387,
        macros: Macros {
            protein_g: 42,
            fat_g: 8,
            carbohydrates_g: 28,
        },
        confidence: ConfidencePercent::new(94),
        items: vec![
            LineItem::new("chicken-breast", 180, 297),
            LineItem::new("quinoa", 60, 55),
            LineItem::new("vegetables", 60, 35),
        ],
    }
}

/// [`NutritionAnalyzer`] returning [`fixed_result`] for any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAnalyzer;

impl NutritionAnalyzer for FixedAnalyzer {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn analyze(&self, _image: &SelectedImage) -> Result<AnalysisResult, AnalysisError> {
        Ok(fixed_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::ImageKind;

    #[test]
    fn result_does_not_depend_on_input() {
        let analyzer = FixedAnalyzer;
        let a = analyzer.analyze(&SelectedImage::new("a.jpg", 1, ImageKind::Jpeg));
        let b = analyzer.analyze(&SelectedImage::new("b.webp", 999, ImageKind::Webp));
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_values() {
        let result = fixed_result();
        assert_eq!(result.portion_g, 300);
        assert_eq!(result.calories_kcal, 387);
        assert_eq!(result.macros.protein_g, 42);
        assert_eq!(result.macros.fat_g, 8);
        assert_eq!(result.macros.carbohydrates_g, 28);
        assert_eq!(result.confidence.value(), 94);
        assert_eq!(result.items.len(), 3);
    }

    #[test]
    fn line_items_add_up_to_total() {
        let result = fixed_result();
        assert_eq!(result.itemized_calories(), result.calories_kcal);
        assert_eq!(result.itemized_weight_g(), result.portion_g);
    }
}
