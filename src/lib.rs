// ABOUTME: Main library entry point for the nutrisearch food aggregation engine
// ABOUTME: Fans queries out to food databases, deduplicates, ranks, and caches the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrisearch
//!
//! A multi-source nutrition data engine. A name query is sent concurrently to
//! every configured food database; the answers are merged in source-priority
//! order, exact duplicates are removed, and the remainder is ranked by source
//! trust, query relevance, and nutrition completeness. A barcode query walks
//! the barcode-capable sources in priority order and returns the first hit.
//!
//! ## Architecture
//!
//! - **Sources** (`nutrisearch-sources`): one adapter per food database, each
//!   wrapped in a boundary that turns every failure into an empty result
//! - **Search**: aggregator, deduplicator, relevance scorer, and ranker
//! - **Cache**: in-memory TTL cache for both whole pipelines and raw
//!   per-source answers
//! - **Config**: environment-only configuration with typed defaults
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrisearch::config::EngineConfig;
//! use nutrisearch::errors::AppResult;
//! use nutrisearch::search::FoodSearchService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_env()?;
//!     let service = FoodSearchService::from_config(&config);
//!
//!     for food in service.search_food("greek yogurt").await? {
//!         println!("{} ({}): {} kcal", food.name(), food.source(), food.calories());
//!     }
//!     Ok(())
//! }
//! ```

/// In-memory result cache with TTL expiry and background sweeping
pub mod cache;

/// Environment-based configuration
pub mod config;

/// Re-exported constants from `nutrisearch-core`
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Re-exported canonical models from `nutrisearch-core`
pub mod models;

/// Search pipeline: aggregation, deduplication, scoring, ranking
pub mod search;

/// Source adapters, re-exported from `nutrisearch-sources`
pub mod sources {
    pub use nutrisearch_sources::*;
}
