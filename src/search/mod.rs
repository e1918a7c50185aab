// ABOUTME: Search pipeline: fan-out aggregation, identity dedup, relevance scoring, and ranking
// ABOUTME: FoodSearchService wires the stages together behind the result cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The search pipeline.
//!
//! query → cache → [`Aggregator`] → [`dedupe`] → [`rank`] (scoring with
//! [`score`]) → cache → caller. The similarity functions in [`similarity`]
//! are an advisory grouping capability and are not part of that flow.

/// Concurrent fan-out over source adapters
pub mod aggregator;
/// Identity deduplication
pub mod dedup;
/// Stable ranking by relevance score
pub mod ranking;
/// Relevance scoring
pub mod scoring;
/// Search service facade
pub mod service;
/// Name and nutrition similarity, similarity grouping
pub mod similarity;

pub use aggregator::Aggregator;
pub use dedup::dedupe;
pub use ranking::rank;
pub use scoring::score;
pub use service::{FoodSearchService, BARCODE_PRIORITY, NAME_SEARCH_PRIORITY};
pub use similarity::{group_similar, name_similarity, nutrition_similar};
