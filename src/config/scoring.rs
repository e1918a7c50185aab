// ABOUTME: Typed relevance-scoring and similarity constants in one configuration structure
// ABOUTME: Defaults are the documented weights; tests assert on them directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::scoring::{
    BRAND_EXACT_WORD_BONUS, BRAND_SUBSTRING_BONUS, COMPLETENESS_BONUS,
    CONTAINMENT_SIMILARITY_FLOOR, MIN_TERM_LEN, NAME_EXACT_WORD_BONUS, NAME_GROUPING_THRESHOLD,
    NAME_PREFIX_BONUS, NAME_SUBSTRING_BONUS, NUTRITIONIX_WEIGHT, NUTRITION_SIMILARITY_TOLERANCE,
    OPEN_FOOD_FACTS_WEIGHT, USDA_WEIGHT,
};
use crate::models::FoodSource;
use serde::{Deserialize, Serialize};

/// Relevance scoring and similarity configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Base score for Nutritionix records (trusted commercial source)
    pub nutritionix_weight: f64,
    /// Base score for USDA records (authoritative, sparse)
    pub usda_weight: f64,
    /// Base score for Open Food Facts records (community catalog)
    pub open_food_facts_weight: f64,
    /// Query term equals a whole word of the name
    pub name_exact_word_bonus: f64,
    /// Query term appears inside the name but not as a whole word
    pub name_substring_bonus: f64,
    /// Name starts with the query term
    pub name_prefix_bonus: f64,
    /// Query term equals a whole word of the brand
    pub brand_exact_word_bonus: f64,
    /// Query term appears inside the brand but not as a whole word
    pub brand_substring_bonus: f64,
    /// Per populated field among calories, protein, carbs, fat, serving size, serving unit
    pub completeness_bonus: f64,
    /// Terms must be longer than this many characters
    pub min_term_len: usize,
    /// Relative tolerance for per-nutrient similarity
    pub nutrition_tolerance: f64,
    /// Name similarity when one name contains the other, before length scaling
    pub containment_floor: f64,
    /// Minimum name similarity for two records to group together
    pub grouping_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            nutritionix_weight: NUTRITIONIX_WEIGHT,
            usda_weight: USDA_WEIGHT,
            open_food_facts_weight: OPEN_FOOD_FACTS_WEIGHT,
            name_exact_word_bonus: NAME_EXACT_WORD_BONUS,
            name_substring_bonus: NAME_SUBSTRING_BONUS,
            name_prefix_bonus: NAME_PREFIX_BONUS,
            brand_exact_word_bonus: BRAND_EXACT_WORD_BONUS,
            brand_substring_bonus: BRAND_SUBSTRING_BONUS,
            completeness_bonus: COMPLETENESS_BONUS,
            min_term_len: MIN_TERM_LEN,
            nutrition_tolerance: NUTRITION_SIMILARITY_TOLERANCE,
            containment_floor: CONTAINMENT_SIMILARITY_FLOOR,
            grouping_threshold: NAME_GROUPING_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    /// Base trust score for a source
    #[must_use]
    pub const fn source_weight(&self, source: FoodSource) -> f64 {
        match source {
            FoodSource::Nutritionix => self.nutritionix_weight,
            FoodSource::Usda => self.usda_weight,
            FoodSource::OpenFoodFacts => self.open_food_facts_weight,
        }
    }
}
