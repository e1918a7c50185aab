// ABOUTME: Identity deduplication by provenance key, keeping the first occurrence
// ABOUTME: Preserves the aggregator's source-priority order; distinct sources are never merged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::FoodRecord;
use std::collections::HashSet;

/// Drop every record whose `source:source_id` was already seen.
///
/// Idempotent: running it on its own output changes nothing.
#[must_use]
pub fn dedupe(records: Vec<FoodRecord>) -> Vec<FoodRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.identity_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodSource;

    fn record(source: FoodSource, id: &str, name: &str) -> Option<FoodRecord> {
        FoodRecord::new(source, id, name)
    }

    #[test]
    fn test_keeps_first_occurrence() {
        let records: Vec<FoodRecord> = [
            record(FoodSource::Usda, "1", "Oats"),
            record(FoodSource::OpenFoodFacts, "1", "Oats"),
            record(FoodSource::Usda, "1", "Oats, rolled"),
            record(FoodSource::Usda, "2", "Oat bran"),
        ]
        .into_iter()
        .flatten()
        .collect();

        let deduped = dedupe(records);
        let names: Vec<&str> = deduped.iter().map(FoodRecord::name).collect();
        assert_eq!(names, vec!["Oats", "Oats", "Oat bran"]);
        assert_eq!(deduped[0].source(), FoodSource::Usda);
        assert_eq!(deduped[1].source(), FoodSource::OpenFoodFacts);
    }

    #[test]
    fn test_idempotent() {
        let records: Vec<FoodRecord> = (0..6)
            .filter_map(|i| record(FoodSource::Nutritionix, &(i % 3).to_string(), "Rice"))
            .collect();

        let once = dedupe(records);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }
}
