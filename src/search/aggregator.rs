// ABOUTME: Concurrent fan-out of a query to every name-capable source adapter
// ABOUTME: Concatenates answers in configured priority order; barcode lookups short-circuit in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::{CacheKey, InMemoryCache};
use crate::models::{FoodRecord, FoodSource};
use crate::sources::SourceAdapter;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fans queries out to the configured adapters.
///
/// Each adapter's raw answer is cached under its own key, so a miss on the
/// whole pipeline can still reuse recent per-source answers.
pub struct Aggregator {
    adapters: Vec<Arc<SourceAdapter>>,
    barcode_priority: Vec<FoodSource>,
    cache: InMemoryCache,
}

impl Aggregator {
    /// Adapters in name-search priority order. Barcode priority defaults to
    /// the same order restricted to barcode-capable adapters.
    #[must_use]
    pub fn new(adapters: Vec<Arc<SourceAdapter>>, cache: InMemoryCache) -> Self {
        let barcode_priority = adapters
            .iter()
            .filter(|adapter| adapter.supports_barcode())
            .map(|adapter| adapter.kind())
            .collect();
        Self {
            adapters,
            barcode_priority,
            cache,
        }
    }

    /// Override the order in which barcode-capable sources are tried
    #[must_use]
    pub fn with_barcode_priority(mut self, order: &[FoodSource]) -> Self {
        self.barcode_priority = order.to_vec();
        self
    }

    /// Sources in name-search priority order
    #[must_use]
    pub fn sources(&self) -> Vec<FoodSource> {
        self.adapters.iter().map(|adapter| adapter.kind()).collect()
    }

    fn adapter(&self, source: FoodSource) -> Option<&Arc<SourceAdapter>> {
        self.adapters.iter().find(|adapter| adapter.kind() == source)
    }

    /// Search every name-capable adapter concurrently and concatenate the
    /// answers in priority order. Waits for every adapter to settle; a slow
    /// adapter delays the result by at most its own timeout.
    pub async fn aggregate(&self, query: &str) -> Vec<FoodRecord> {
        let searches = self
            .adapters
            .iter()
            .filter(|adapter| adapter.supports_name_search())
            .map(|adapter| self.search_adapter(adapter, query));

        join_all(searches).await.into_iter().flatten().collect()
    }

    /// One source's answer, served from the per-source cache when fresh.
    /// Returns `None` when the source is not configured.
    pub async fn search_source(&self, source: FoodSource, query: &str) -> Option<Vec<FoodRecord>> {
        let adapter = self.adapter(source)?;
        Some(self.search_adapter(adapter, query).await)
    }

    async fn search_adapter(&self, adapter: &SourceAdapter, query: &str) -> Vec<FoodRecord> {
        let key = CacheKey::source(adapter.kind(), query);
        if let Some(records) = self.cache.get::<Vec<FoodRecord>>(&key) {
            return records;
        }

        let records = adapter.search(query).await;
        // An empty answer may be an upstream failure; let the next call retry.
        if !records.is_empty() {
            if let Err(e) = self.cache.set(&key, &records) {
                warn!(cache_key = %key, error = %e, "Failed to cache source results");
            }
        }
        records
    }

    /// Try barcode-capable adapters in priority order and return the first hit
    pub async fn lookup_barcode(&self, barcode: &str) -> Option<FoodRecord> {
        for source in &self.barcode_priority {
            let Some(adapter) = self.adapter(*source) else {
                continue;
            };
            if let Some(record) = adapter.lookup(barcode).await {
                debug!(source = %source, barcode, "Barcode resolved");
                return Some(record);
            }
        }
        None
    }
}
