// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scriptable fake food source, record builders, and service setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutrisearch`
//!
//! This module provides a fake [`FoodDataSource`] whose answers, latency,
//! and failures are scripted per test, plus helpers that wire fakes into a
//! [`FoodSearchService`] without touching the network.

use async_trait::async_trait;
use nutrisearch::cache::{CacheConfig, InMemoryCache};
use nutrisearch::config::ScoringConfig;
use nutrisearch::errors::{SourceError, SourceResult};
use nutrisearch::models::{FoodRecord, FoodSource};
use nutrisearch::search::FoodSearchService;
use nutrisearch::sources::{FoodDataSource, SourceAdapter};
use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;
use tokio::time::sleep;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Per-call timeout used by test adapters
pub const TEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when debugging a failing test
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Record with a fixed id and no nutrition
pub fn food(source: FoodSource, id: &str, name: &str) -> FoodRecord {
    FoodRecord::new(source, id, name).expect("test records have a name and id")
}

/// Cache with the background sweep disabled
pub fn test_cache(max_entries: usize, ttl: Duration) -> InMemoryCache {
    InMemoryCache::new(&CacheConfig {
        ttl,
        sweep_interval: Duration::from_secs(600),
        max_entries,
        enable_background_sweep: false,
    })
}

/// Scriptable in-process food source
pub struct FakeSource {
    kind: FoodSource,
    records: Vec<FoodRecord>,
    barcodes: HashMap<String, FoodRecord>,
    barcode_capable: bool,
    delay: Option<Duration>,
    failing: bool,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new(kind: FoodSource) -> Self {
        Self {
            kind,
            records: Vec::new(),
            barcodes: HashMap::new(),
            barcode_capable: false,
            delay: None,
            failing: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer every name search with `records`
    pub fn with_records(mut self, records: Vec<FoodRecord>) -> Self {
        self.records = records;
        self
    }

    /// Answer barcode lookups; makes the source barcode-capable
    pub fn with_barcode(mut self, code: &str, record: FoodRecord) -> Self {
        self.barcodes.insert(code.to_owned(), record);
        self.barcode_capable = true;
        self
    }

    /// Barcode-capable without any known products
    pub fn barcode_capable(mut self) -> Self {
        self.barcode_capable = true;
        self
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every call with a network error
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Counter of fetch calls, shared with the source
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    async fn enter(&self) -> SourceResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        if self.failing {
            return Err(SourceError::network(self.kind, "connection reset by fake"));
        }
        Ok(())
    }
}

#[async_trait]
impl FoodDataSource for FakeSource {
    fn kind(&self) -> FoodSource {
        self.kind
    }

    fn supports_barcode(&self) -> bool {
        self.barcode_capable
    }

    async fn fetch_search(&self, _query: &str, limit: u32) -> SourceResult<Vec<FoodRecord>> {
        self.enter().await?;
        Ok(self.records.iter().take(limit as usize).cloned().collect())
    }

    async fn fetch_barcode(&self, barcode: &str) -> SourceResult<Option<FoodRecord>> {
        self.enter().await?;
        Ok(self.barcodes.get(barcode).cloned())
    }
}

/// Wrap a fake in the production adapter boundary
pub fn adapter(source: FakeSource) -> SourceAdapter {
    SourceAdapter::new(Arc::new(source), TEST_TIMEOUT, 25)
}

/// Service over fakes, given in name-search priority order
pub fn service_with(sources: Vec<FakeSource>) -> FoodSearchService {
    init_test_logging();
    FoodSearchService::new(
        sources.into_iter().map(adapter).collect(),
        test_cache(1_000, Duration::from_secs(300)),
        ScoringConfig::default(),
    )
}
