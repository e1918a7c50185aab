// ABOUTME: Result cache configuration, structured keys, and statistics
// ABOUTME: Keys are derived from the operation and its normalized input so equal queries share entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory cache implementation
pub mod memory;

pub use memory::InMemoryCache;

use crate::constants::cache::{
    BARCODE_KEY_PREFIX, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_SWEEP_INTERVAL_SECS, SEARCH_KEY_PREFIX,
};
use crate::models::FoodSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum age at which an entry is still a hit (default: 5 minutes)
    pub ttl: Duration,
    /// Interval between background sweeps (default: 10 minutes)
    pub sweep_interval: Duration,
    /// Maximum number of entries before the oldest is evicted
    pub max_entries: usize,
    /// Enable background sweep task (should be false in tests that drive `sweep()` by hand)
    pub enable_background_sweep: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            enable_background_sweep: true,
        }
    }
}

/// Structured cache key.
///
/// Build keys with [`CacheKey::search`], [`CacheKey::barcode`], and
/// [`CacheKey::source`] so the input is normalized; constructing a variant
/// directly stores the text as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Whole ranked name search
    Search(String),
    /// Whole barcode lookup
    Barcode(String),
    /// Raw output of one source for one query
    Source(FoodSource, String),
}

impl CacheKey {
    /// Key for a ranked name search
    #[must_use]
    pub fn search(query: &str) -> Self {
        Self::Search(normalize_query(query))
    }

    /// Key for a barcode lookup
    #[must_use]
    pub fn barcode(code: &str) -> Self {
        Self::Barcode(code.trim().to_owned())
    }

    /// Key for one source's raw answer to a query
    #[must_use]
    pub fn source(source: FoodSource, query: &str) -> Self {
        Self::Source(source, normalize_query(query))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(query) => write!(f, "{SEARCH_KEY_PREFIX}:{query}"),
            Self::Barcode(code) => write!(f, "{BARCODE_KEY_PREFIX}:{code}"),
            Self::Source(source, query) => write!(f, "{source}:{query}"),
        }
    }
}

/// Trim, lower-case, and collapse internal whitespace
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Point-in-time cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Reads that returned a live, decodable entry
    pub hits: u64,
    /// Reads that found nothing, an expired entry, or an undecodable value
    pub misses: u64,
    /// Entries currently stored, expired ones included until swept
    pub entries: usize,
}
