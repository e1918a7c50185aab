// ABOUTME: Criterion benchmarks for the search pipeline stages after fan-out
// ABOUTME: Measures deduplication, relevance ranking, and cross-source grouping on synthetic results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the pure pipeline stages.
//!
//! The aggregated batches mimic three sources answering a full page each,
//! with some records repeated so deduplication has work to do.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutrisearch::config::ScoringConfig;
use nutrisearch::models::{FoodRecord, FoodSource};
use nutrisearch::search::{dedupe, group_similar, rank};

const NAMES: [&str; 6] = [
    "Chicken Breast",
    "Grilled Chicken Breast",
    "Chicken Thigh",
    "Sweet Chicken Sauce",
    "Chicken Noodle Soup",
    "Breaded Chicken Strips",
];

/// `per_source` records from each source; every fifth id repeats
fn aggregated_batch(per_source: usize) -> Vec<FoodRecord> {
    FoodSource::ALL
        .iter()
        .flat_map(|source| {
            (0..per_source).map(move |i| {
                let id = if i % 5 == 0 { 0 } else { i };
                let calories = 100.0 + (i % 7) as f64 * 15.0;
                FoodRecord::new(*source, id.to_string(), NAMES[i % NAMES.len()])
                    .unwrap()
                    .with_macros(calories, 20.0, 5.0, 4.0)
            })
        })
        .collect()
}

fn bench_dedupe(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedupe");

    for per_source in [10_usize, 25, 200] {
        let batch = aggregated_batch(per_source);
        group.bench_with_input(BenchmarkId::from_parameter(per_source), &batch, |b, batch| {
            b.iter(|| dedupe(black_box(batch.clone())));
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let config = ScoringConfig::default();

    for per_source in [10_usize, 25, 200] {
        let batch = dedupe(aggregated_batch(per_source));
        group.bench_with_input(BenchmarkId::from_parameter(per_source), &batch, |b, batch| {
            b.iter(|| rank(black_box(batch.clone()), black_box("grilled chicken"), &config));
        });
    }

    group.finish();
}

fn bench_group_similar(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_similar");
    let config = ScoringConfig::default();

    for per_source in [10_usize, 25] {
        let ranked = rank(dedupe(aggregated_batch(per_source)), "chicken", &config);
        group.bench_with_input(BenchmarkId::from_parameter(per_source), &ranked, |b, ranked| {
            b.iter(|| group_similar(black_box(ranked), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dedupe, bench_rank, bench_group_similar);
criterion_main!(benches);
