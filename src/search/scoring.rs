// ABOUTME: Relevance scoring from source trust, query term matches, and data completeness
// ABOUTME: Pure and deterministic for a given record, query, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ScoringConfig;
use crate::models::FoodRecord;

/// Lower-cased alphanumeric words
pub(crate) fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Query terms that take part in matching
fn query_terms(query: &str, config: &ScoringConfig) -> Vec<String> {
    let mut terms = words(query);
    terms.retain(|term| term.chars().count() > config.min_term_len);
    terms
}

fn text_match_score(record: &FoodRecord, terms: &[String], config: &ScoringConfig) -> f64 {
    let name = record.name().to_lowercase();
    let name_words = words(&name);
    let brand = record.brand().map(str::to_lowercase).unwrap_or_default();
    let brand_words = words(&brand);

    terms.iter().fold(0.0, |total, term| {
        let mut points = 0.0;

        if name_words.contains(term) {
            points += config.name_exact_word_bonus;
        } else if name.contains(term.as_str()) {
            points += config.name_substring_bonus;
        }
        if name.starts_with(term.as_str()) {
            points += config.name_prefix_bonus;
        }

        if brand_words.contains(term) {
            points += config.brand_exact_word_bonus;
        } else if brand.contains(term.as_str()) {
            points += config.brand_substring_bonus;
        }

        total + points
    })
}

fn completeness_score(record: &FoodRecord, config: &ScoringConfig) -> f64 {
    let present = [
        record.calories() > 0.0,
        record.protein() > 0.0,
        record.carbs() > 0.0,
        record.fat() > 0.0,
        record.serving_size() > 0.0,
        !record.serving_unit().is_empty(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    present as f64 * config.completeness_bonus
}

/// Relevance of `record` to `query`.
///
/// Source weight, plus per-term name and brand match bonuses, plus one
/// completeness increment per populated nutrition field.
#[must_use]
pub fn score(record: &FoodRecord, query: &str, config: &ScoringConfig) -> f64 {
    let terms = query_terms(query, config);
    config.source_weight(record.source())
        + text_match_score(record, &terms, config)
        + completeness_score(record, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodSource;

    fn food(source: FoodSource, name: &str, brand: Option<&str>) -> FoodRecord {
        FoodRecord::new(source, "1", name)
            .unwrap_or_else(|| unreachable!("test names are non-blank"))
            .with_brand(brand)
    }

    #[test]
    fn test_bare_record_scores_source_weight_plus_serving() {
        let config = ScoringConfig::default();
        let record = food(FoodSource::Usda, "Tofu", None);
        // serving size 100 and unit "g" are always populated
        assert!((score(&record, "xyz", &config) - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_word_beats_substring() {
        let config = ScoringConfig::default();
        let exact = food(FoodSource::Usda, "Chicken Breast", None);
        let substring = food(FoodSource::Usda, "Chickenpea Salad", None);

        // exact word + prefix vs substring + prefix
        assert!((score(&exact, "chicken", &config) - 37.0).abs() < f64::EPSILON);
        assert!((score(&substring, "chicken", &config) - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_brand_matches_score_below_name_matches() {
        let config = ScoringConfig::default();
        let brand_word = food(FoodSource::OpenFoodFacts, "Yogurt", Some("Acme Foods"));
        let brand_sub = food(FoodSource::OpenFoodFacts, "Yogurt", Some("Acmeco"));

        assert!((score(&brand_word, "acme", &config) - 15.0).abs() < f64::EPSILON);
        assert!((score(&brand_sub, "acme", &config) - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_character_terms_ignored() {
        let config = ScoringConfig::default();
        let record = food(FoodSource::Nutritionix, "A Apple", None);
        let with_short = score(&record, "a apple", &config);
        let without = score(&record, "apple", &config);
        assert!((with_short - without).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completeness_rewards_populated_macros() {
        let config = ScoringConfig::default();
        let sparse = food(FoodSource::Usda, "Rice", None);
        let full = sparse.clone().with_macros(130.0, 2.7, 28.0, 0.3);
        assert!(
            (score(&full, "rice", &config) - score(&sparse, "rice", &config) - 4.0).abs()
                < f64::EPSILON
        );
    }
}
