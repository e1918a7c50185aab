// ABOUTME: Relevance scoring weights, term match bonuses, and similarity tolerances
// ABOUTME: Defaults for ScoringConfig so tests can assert on the documented values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Base score for the pre-normalized commercial source
pub const NUTRITIONIX_WEIGHT: f64 = 30.0;
/// Base score for the authoritative government source
pub const USDA_WEIGHT: f64 = 20.0;
/// Base score for the community-maintained catalog
pub const OPEN_FOOD_FACTS_WEIGHT: f64 = 10.0;

/// Query term equals a whole word of the record name
pub const NAME_EXACT_WORD_BONUS: f64 = 10.0;
/// Query term appears inside the record name
pub const NAME_SUBSTRING_BONUS: f64 = 5.0;
/// Record name starts with the query term
pub const NAME_PREFIX_BONUS: f64 = 5.0;
/// Query term equals a whole word of the brand
pub const BRAND_EXACT_WORD_BONUS: f64 = 3.0;
/// Query term appears inside the brand
pub const BRAND_SUBSTRING_BONUS: f64 = 1.0;

/// Bonus for each populated field among calories, protein, carbs, fat, serving size, serving unit
pub const COMPLETENESS_BONUS: f64 = 1.0;

/// Shortest query term considered during matching (terms must be longer than this)
pub const MIN_TERM_LEN: usize = 1;

/// Maximum relative difference between two per-100 nutrient values that still match
pub const NUTRITION_SIMILARITY_TOLERANCE: f64 = 0.20;

/// Lowest similarity awarded when one normalized name contains the other
pub const CONTAINMENT_SIMILARITY_FLOOR: f64 = 0.7;

/// Name similarity at or above which two records may be grouped
pub const NAME_GROUPING_THRESHOLD: f64 = 0.8;
