// ABOUTME: Stable ranking of records by relevance score, highest first
// ABOUTME: Scores live only inside the ranker; callers get plain records back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::scoring::score;
use crate::config::ScoringConfig;
use crate::models::FoodRecord;

/// A record paired with its relevance to the current query
struct ScoredCandidate {
    record: FoodRecord,
    relevance: f64,
}

/// Sort by descending relevance. Ties keep their input order, which encodes
/// source priority.
#[must_use]
pub fn rank(records: Vec<FoodRecord>, query: &str, config: &ScoringConfig) -> Vec<FoodRecord> {
    let mut candidates: Vec<ScoredCandidate> = records
        .into_iter()
        .map(|record| ScoredCandidate {
            relevance: score(&record, query, config),
            record,
        })
        .collect();

    // sort_by is stable
    candidates.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    candidates.into_iter().map(|c| c.record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodSource;

    fn food(source: FoodSource, id: &str, name: &str) -> FoodRecord {
        FoodRecord::new(source, id, name).unwrap_or_else(|| unreachable!("non-blank test name"))
    }

    #[test]
    fn test_exact_word_match_ranks_first() {
        let config = ScoringConfig::default();
        let records = vec![
            food(FoodSource::Usda, "1", "Sweet Chicken Sauce"),
            food(FoodSource::Usda, "2", "Chicken Breast"),
        ];

        let ranked = rank(records, "chicken", &config);
        assert_eq!(ranked[0].name(), "Chicken Breast");
        assert_eq!(ranked[1].name(), "Sweet Chicken Sauce");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let config = ScoringConfig::default();
        let records = vec![
            food(FoodSource::OpenFoodFacts, "b", "Brown Rice"),
            food(FoodSource::OpenFoodFacts, "a", "Brown Rice"),
            food(FoodSource::Nutritionix, "c", "Brown Rice"),
        ];

        let ranked = rank(records, "brown rice", &config);
        let ids: Vec<&str> = ranked.iter().map(FoodRecord::source_id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }
}
