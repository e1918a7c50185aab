// ABOUTME: Cache-related constants for TTL, capacity, and sweep intervals
// ABOUTME: Key prefixes used when rendering cache keys for each operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Maximum age of a cache entry that still counts as a hit (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Interval of the background sweep that evicts expired entries (10 minutes)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 600;

/// Default maximum cache entries for the in-memory store
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Prefix for aggregated name-search results
pub const SEARCH_KEY_PREFIX: &str = "search";

/// Prefix for barcode lookups
pub const BARCODE_KEY_PREFIX: &str = "barcode";
