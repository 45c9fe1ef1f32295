// SPDX-License-Identifier: MPL-2.0
//! Nutrition summary produced by an analyzer.
//!
//! All quantities are whole numbers: grams for masses, kilocalories for
//! energy. The analyzer decides the values; this module only carries them.

/// Confidence of an analysis, guaranteed to be within 0–100 %.
///
/// # Example
///
/// ```
/// use plate_lens::domain::nutrition::ConfidencePercent;
///
/// assert_eq!(ConfidencePercent::new(94).value(), 94);
/// assert_eq!(ConfidencePercent::new(250).value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ConfidencePercent(u8);

impl ConfidencePercent {
    /// Upper bound of the confidence scale.
    pub const MAX: u8 = 100;

    /// Creates a confidence value, clamping to 100.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    /// Returns the raw percentage.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the confidence as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

/// Protein / fat / carbohydrate split of a dish, in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Macros {
    pub protein_g: u32,
    pub fat_g: u32,
    pub carbohydrates_g: u32,
}

/// One recognised component of the dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Stable identifier of the ingredient (also used as the i18n suffix).
    pub ingredient: String,
    pub weight_g: u32,
    pub calories_kcal: u32,
}

impl LineItem {
    #[must_use]
    pub fn new(ingredient: impl Into<String>, weight_g: u32, calories_kcal: u32) -> Self {
        Self {
            ingredient: ingredient.into(),
            weight_g,
            calories_kcal,
        }
    }
}

/// Complete result of analysing one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Stable identifier of the dish (also used as the i18n suffix).
    pub dish: String,
    /// Estimated portion weight.
    pub portion_g: u32,
    /// Total energy of the portion.
    pub calories_kcal: u32,
    pub macros: Macros,
    pub confidence: ConfidencePercent,
    /// Per-ingredient breakdown, in display order.
    pub items: Vec<LineItem>,
}

impl AnalysisResult {
    /// Sum of the line-item calories.
    ///
    /// This can differ from [`AnalysisResult::calories_kcal`] when the
    /// analyzer rounds per item.
    #[must_use]
    pub fn itemized_calories(&self) -> u32 {
        self.items.iter().map(|item| item.calories_kcal).sum()
    }

    /// Sum of the line-item weights.
    #[must_use]
    pub fn itemized_weight_g(&self) -> u32 {
        self.items.iter().map(|item| item.weight_g).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            dish: "test-dish".into(),
            portion_g: 200,
            calories_kcal: 150,
            macros: Macros {
                protein_g: 10,
                fat_g: 5,
                carbohydrates_g: 20,
            },
            confidence: ConfidencePercent::new(80),
            items: vec![LineItem::new("a", 120, 100), LineItem::new("b", 80, 50)],
        }
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(ConfidencePercent::new(101).value(), 100);
        assert_eq!(ConfidencePercent::new(0).value(), 0);
    }

    #[test]
    fn confidence_fraction() {
        let half = ConfidencePercent::new(50).as_fraction();
        assert!((half - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn itemized_sums() {
        let result = sample();
        assert_eq!(result.itemized_calories(), 150);
        assert_eq!(result.itemized_weight_g(), 200);
    }
}
