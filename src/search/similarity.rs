// ABOUTME: Name and nutrition similarity between records from different sources
// ABOUTME: Advisory grouping for display; never used to drop records from search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::scoring::words;
use crate::config::ScoringConfig;
use crate::models::{FoodRecord, NutritionPer100};
use std::mem;

/// Lower-cased words with punctuation removed, joined by single spaces
fn normalize_name(name: &str) -> Vec<char> {
    words(name).join(" ").chars().collect()
}

/// Edit distance over chars, two-row dynamic programming
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Similarity of two food names in `0.0..=1.0`.
///
/// Equal after normalization is 1.0. When one name contains the other the
/// score runs from the containment floor up to 1.0 with the length ratio of
/// the shorter to the longer. Otherwise it is `1 - edit_distance / max_len`.
#[must_use]
pub fn name_similarity(a: &str, b: &str, config: &ScoringConfig) -> f64 {
    let a = normalize_name(a);
    let b = normalize_name(b);

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let ratio = shorter.len() as f64 / longer.len() as f64;
    if longer.windows(shorter.len()).any(|window| window == shorter.as_slice()) {
        return ratio.mul_add(1.0 - config.containment_floor, config.containment_floor);
    }

    1.0 - levenshtein(&a, &b) as f64 / longer.len() as f64
}

fn within_tolerance(x: f64, y: f64, tolerance: f64) -> bool {
    // Values are non-negative
    match (x > 0.0, y > 0.0) {
        (false, false) => return true,
        (true, true) => {}
        _ => return false,
    }
    (x - y).abs() / x.max(y) <= tolerance
}

/// Whether two records carry the same nutrition per 100 serving units.
///
/// Each of calories, protein, carbs, and fat must be within `tolerance` of
/// the larger value. Zero on both sides matches; zero against non-zero does not.
#[must_use]
pub fn nutrition_similar(a: &FoodRecord, b: &FoodRecord, tolerance: f64) -> bool {
    let NutritionPer100 {
        calories: ca,
        protein: pa,
        carbs: cha,
        fat: fa,
    } = a.nutrition_per_100();
    let NutritionPer100 {
        calories: cb,
        protein: pb,
        carbs: chb,
        fat: fb,
    } = b.nutrition_per_100();

    [(ca, cb), (pa, pb), (cha, chb), (fa, fb)]
        .into_iter()
        .all(|(x, y)| within_tolerance(x, y, tolerance))
}

fn same_food(a: &FoodRecord, b: &FoodRecord, config: &ScoringConfig) -> bool {
    a.source() != b.source()
        && name_similarity(a.name(), b.name(), config) >= config.grouping_threshold
        && nutrition_similar(a, b, config.nutrition_tolerance)
}

/// Group records that likely describe the same food.
///
/// Each group holds at most one record per source; a record joins the first
/// group whose leading record it resembles, otherwise it starts a new group.
/// Every input record appears in exactly one group, in input order.
#[must_use]
pub fn group_similar(records: &[FoodRecord], config: &ScoringConfig) -> Vec<Vec<FoodRecord>> {
    let mut groups: Vec<Vec<FoodRecord>> = Vec::new();

    for record in records {
        let home = groups.iter_mut().find(|group| {
            group.iter().all(|member| member.source() != record.source())
                && group
                    .first()
                    .is_some_and(|leader| same_food(leader, record, config))
        });

        match home {
            Some(group) => group.push(record.clone()),
            None => groups.push(vec![record.clone()]),
        }
    }
    groups
}
