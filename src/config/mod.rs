// ABOUTME: Configuration module for the search engine, sources, cache, and scoring
// ABOUTME: Environment-only configuration with typed defaults from the constants module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the nutrisearch engine.
//!
//! - **Environment**: engine, source, and cache settings read from environment variables
//! - **Scoring**: relevance weights and similarity tolerances

/// Environment-based engine and source configuration
pub mod environment;
/// Relevance scoring and similarity constants
pub mod scoring;

pub use environment::{EngineConfig, SourcesConfig};
pub use scoring::ScoringConfig;
