// ABOUTME: Application constants organized by domain for the aggregation engine
// ABOUTME: Cache lifetimes, source endpoints and timeouts, environment variable names, scoring weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Result cache lifetimes, capacity, and key prefixes
pub mod cache;

/// Environment variable names read by `from_env()` constructors
pub mod env_config;

/// Relevance scoring weights and similarity tolerances
pub mod scoring;

/// External food database endpoints, timeouts, and nutrient identifiers
pub mod sources;
