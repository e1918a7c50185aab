// ABOUTME: Canonical, source-agnostic food record produced by every source adapter
// ABOUTME: Immutable once built; provenance is the (source, source_id) pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::sources::{DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT};
use crate::errors::AppError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix that marks a `source_id` the engine generated because the provider
/// supplied none. Provider-issued ids never carry it.
pub const GENERATED_ID_PREFIX: &str = "generated-";

/// Closed set of external food databases the engine knows how to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodSource {
    /// Nutritionix, a commercial database with pre-normalized servings
    Nutritionix,
    /// USDA `FoodData` Central, authoritative but name-search only
    Usda,
    /// Open Food Facts, a community-maintained barcode catalog
    OpenFoodFacts,
}

impl FoodSource {
    /// Every source, in name-search priority order
    pub const ALL: [Self; 3] = [Self::Nutritionix, Self::Usda, Self::OpenFoodFacts];

    /// Stable identifier used in cache keys, logs, and serialized records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nutritionix => "nutritionix",
            Self::Usda => "usda",
            Self::OpenFoodFacts => "openfoodfacts",
        }
    }
}

impl fmt::Display for FoodSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nutritionix" | "nix" => Ok(Self::Nutritionix),
            "usda" | "fdc" => Ok(Self::Usda),
            "openfoodfacts" | "open_food_facts" | "off" => Ok(Self::OpenFoodFacts),
            other => Err(AppError::invalid_input(format!(
                "unknown food source '{other}', expected one of: nutritionix, usda, openfoodfacts"
            ))),
        }
    }
}

/// Nutrition scaled to 100 units of the record's serving unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionPer100 {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrate (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// Canonical food record.
///
/// Built once by an adapter from a live payload and never mutated afterwards;
/// the `with_*` methods consume the record while it is being assembled.
/// Numeric inputs are sanitized on the way in: macros are finite and
/// non-negative, the serving size is positive, and the unit is lower-cased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    barcode: Option<String>,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    serving_size: f64,
    serving_unit: String,
    source: FoodSource,
    source_id: String,
}

impl FoodRecord {
    /// Start a record. Returns `None` when the name or source id is blank,
    /// since such a record carries no usable identity.
    #[must_use]
    pub fn new(
        source: FoodSource,
        source_id: impl Into<String>,
        name: impl AsRef<str>,
    ) -> Option<Self> {
        let name = name.as_ref().trim();
        let source_id = source_id.into().trim().to_owned();
        if name.is_empty() || source_id.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
            brand: None,
            barcode: None,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            serving_size: DEFAULT_SERVING_SIZE,
            serving_unit: DEFAULT_SERVING_UNIT.to_owned(),
            source,
            source_id,
        })
    }

    /// Set the brand; blank brands are ignored
    #[must_use]
    pub fn with_brand(mut self, brand: Option<&str>) -> Self {
        self.brand = non_blank(brand);
        self
    }

    /// Set the barcode; blank barcodes are ignored
    #[must_use]
    pub fn with_barcode(mut self, barcode: Option<&str>) -> Self {
        self.barcode = non_blank(barcode);
        self
    }

    /// Set energy and macronutrients for the stated serving
    #[must_use]
    pub fn with_macros(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.calories = non_negative(calories);
        self.protein = non_negative(protein);
        self.carbs = non_negative(carbs);
        self.fat = non_negative(fat);
        self
    }

    /// Set the serving the macros refer to
    #[must_use]
    pub fn with_serving(mut self, size: f64, unit: &str) -> Self {
        self.serving_size = if size.is_finite() && size > 0.0 {
            size
        } else {
            DEFAULT_SERVING_SIZE
        };
        let unit = unit.trim().to_lowercase();
        self.serving_unit = if unit.is_empty() {
            DEFAULT_SERVING_UNIT.to_owned()
        } else {
            unit
        };
        self
    }

    /// Build an id for a provider item that has none.
    ///
    /// The result starts with [`GENERATED_ID_PREFIX`] and ends in a millisecond
    /// timestamp plus the item's position in its response, so it is visibly
    /// distinct from provider ids and unique within one payload.
    #[must_use]
    pub fn generated_id(name: &str, position: usize) -> String {
        let slug = name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        format!(
            "{GENERATED_ID_PREFIX}{slug}-{}-{position}",
            Utc::now().timestamp_millis()
        )
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Brand, when the provider reports one
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// External product identifier (UPC/EAN), not a primary key
    #[must_use]
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    /// Energy (kcal) per serving
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Protein (g) per serving
    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.protein
    }

    /// Carbohydrate (g) per serving
    #[must_use]
    pub const fn carbs(&self) -> f64 {
        self.carbs
    }

    /// Fat (g) per serving
    #[must_use]
    pub const fn fat(&self) -> f64 {
        self.fat
    }

    /// Serving size in `serving_unit`
    #[must_use]
    pub const fn serving_size(&self) -> f64 {
        self.serving_size
    }

    /// Lower-cased serving unit
    #[must_use]
    pub fn serving_unit(&self) -> &str {
        &self.serving_unit
    }

    /// Source that produced the record
    #[must_use]
    pub const fn source(&self) -> FoodSource {
        self.source
    }

    /// Identifier unique within `source`
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// `source:source_id`, the provenance key used by identity dedup
    #[must_use]
    pub fn identity_key(&self) -> String {
        format!("{}:{}", self.source, self.source_id)
    }

    /// Whether the id was generated locally instead of issued by the provider
    #[must_use]
    pub fn has_generated_id(&self) -> bool {
        self.source_id.starts_with(GENERATED_ID_PREFIX)
    }

    /// Nutrition scaled to 100 units of the serving unit
    #[must_use]
    pub fn nutrition_per_100(&self) -> NutritionPer100 {
        let factor = 100.0 / self.serving_size;
        NutritionPer100 {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_or_id_is_rejected() {
        assert!(FoodRecord::new(FoodSource::Usda, "1", "   ").is_none());
        assert!(FoodRecord::new(FoodSource::Usda, "  ", "Apple").is_none());
        assert!(FoodRecord::new(FoodSource::Usda, "1", " Apple ").is_some());
    }

    #[test]
    fn test_values_are_sanitized() {
        let record = FoodRecord::new(FoodSource::OpenFoodFacts, "3017620422003", "Nutella")
            .unwrap()
            .with_brand(Some("  "))
            .with_macros(539.0, -1.0, f64::NAN, 30.9)
            .with_serving(0.0, " Grams ");

        assert_eq!(record.brand(), None);
        assert!((record.protein() - 0.0).abs() < f64::EPSILON);
        assert!((record.carbs() - 0.0).abs() < f64::EPSILON);
        assert!((record.serving_size() - 100.0).abs() < f64::EPSILON);
        assert_eq!(record.serving_unit(), "grams");
    }

    #[test]
    fn test_generated_ids_are_distinguishable() {
        let id = FoodRecord::generated_id("Grilled Chicken, Breast", 3);
        assert!(id.starts_with("generated-grilled-chicken-breast-"));
        assert!(id.ends_with("-3"));
        assert_ne!(
            FoodRecord::generated_id("Grilled Chicken", 0),
            FoodRecord::generated_id("Grilled Chicken", 1)
        );

        let generated = FoodRecord::new(FoodSource::Nutritionix, id, "Grilled chicken").unwrap();
        let issued = FoodRecord::new(FoodSource::Nutritionix, "513fc9e73fe3ffd40300109f", "x")
            .unwrap();
        assert!(generated.has_generated_id());
        assert!(!issued.has_generated_id());
    }

    #[test]
    fn test_nutrition_per_100_scales_by_serving() {
        let record = FoodRecord::new(FoodSource::Nutritionix, "a", "Bar")
            .unwrap()
            .with_macros(200.0, 10.0, 20.0, 8.0)
            .with_serving(50.0, "g");
        let per_100 = record.nutrition_per_100();
        assert!((per_100.calories - 400.0).abs() < 1e-9);
        assert!((per_100.fat - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_source_parsing_and_identity_key() {
        assert_eq!("OFF".parse::<FoodSource>().unwrap(), FoodSource::OpenFoodFacts);
        assert!("myfitnesspal".parse::<FoodSource>().is_err());

        let record = FoodRecord::new(FoodSource::Usda, "171477", "Chicken breast").unwrap();
        assert_eq!(record.identity_key(), "usda:171477");
    }
}
