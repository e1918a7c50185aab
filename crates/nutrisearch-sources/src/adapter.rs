// ABOUTME: Never-failing boundary around a food database: timeout, budget, logging, empty on failure
// ABOUTME: The aggregator only ever sees record lists, so one source can never break a search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::budget::RequestBudget;
use crate::core::FoodDataSource;
use crate::errors::{SourceError, SourceResult};
use crate::models::{FoodRecord, FoodSource};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};
use tracing::{debug, warn};

/// Wraps one [`FoodDataSource`] and absorbs every failure it can produce.
///
/// `search` and `lookup` make at most one outbound call each and never return
/// an error: timeouts, transport failures, bad payloads, missing credentials,
/// and an exhausted budget all degrade to an empty result with a warning.
pub struct SourceAdapter {
    source: Arc<dyn FoodDataSource>,
    timeout: Duration,
    page_size: u32,
    budget: Option<RequestBudget>,
    credential_warned: AtomicBool,
}

impl SourceAdapter {
    /// Wrap a source with a per-call timeout and result page size
    #[must_use]
    pub fn new(source: Arc<dyn FoodDataSource>, timeout: Duration, page_size: u32) -> Self {
        Self {
            source,
            timeout,
            page_size: page_size.max(1),
            budget: None,
            credential_warned: AtomicBool::new(false),
        }
    }

    /// Attach a request budget; calls beyond it are skipped
    #[must_use]
    pub fn with_budget(mut self, budget: RequestBudget) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Which source this adapter wraps
    #[must_use]
    pub fn kind(&self) -> FoodSource {
        self.source.kind()
    }

    /// Whether the wrapped source answers name searches
    #[must_use]
    pub fn supports_name_search(&self) -> bool {
        self.source.supports_name_search()
    }

    /// Whether the wrapped source answers barcode lookups
    #[must_use]
    pub fn supports_barcode(&self) -> bool {
        self.source.supports_barcode()
    }

    /// Search by name. Returns an empty list on blank input or any failure.
    pub async fn search(&self, query: &str) -> Vec<FoodRecord> {
        if query.trim().is_empty() || !self.supports_name_search() {
            return Vec::new();
        }

        let outcome = self
            .call(self.source.fetch_search(query, self.page_size))
            .await;

        match outcome {
            Ok((mut records, elapsed)) => {
                records.truncate(self.page_size as usize);
                debug!(
                    source = %self.kind(),
                    query,
                    results = records.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Source search completed"
                );
                records
            }
            Err(error) => {
                self.report(&error, query);
                Vec::new()
            }
        }
    }

    /// Look up one product by barcode. Returns `None` on blank input or any failure.
    pub async fn lookup(&self, barcode: &str) -> Option<FoodRecord> {
        if barcode.trim().is_empty() || !self.supports_barcode() {
            return None;
        }

        match self.call(self.source.fetch_barcode(barcode)).await {
            Ok((record, elapsed)) => {
                debug!(
                    source = %self.kind(),
                    barcode,
                    found = record.is_some(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Source barcode lookup completed"
                );
                record
            }
            Err(error) => {
                self.report(&error, barcode);
                None
            }
        }
    }

    /// Run one fetch under the credential check, budget, and timeout
    async fn call<T, F>(&self, fetch: F) -> SourceResult<(T, Duration)>
    where
        F: Future<Output = SourceResult<T>> + Send,
    {
        if let Some(variable) = self.source.missing_credential() {
            return Err(SourceError::MissingCredentials {
                provider: self.kind(),
                variable,
            });
        }

        if let Some(budget) = &self.budget {
            budget
                .try_acquire()
                .map_err(|retry_after| SourceError::RateLimited {
                    provider: self.kind(),
                    retry_after_secs: retry_after.as_secs().max(1),
                })?;
        }

        let started = Instant::now();
        let value = timeout(self.timeout, fetch)
            .await
            .map_err(|_| SourceError::Timeout {
                provider: self.kind(),
                timeout_ms: self.timeout.as_millis() as u64,
            })??;
        Ok((value, started.elapsed()))
    }

    fn report(&self, error: &SourceError, input: &str) {
        if let SourceError::MissingCredentials { variable, .. } = error {
            // Unconfigured sources are expected in development; say so once.
            if !self.credential_warned.swap(true, Ordering::Relaxed) {
                warn!(
                    source = %self.kind(),
                    variable,
                    "Source disabled: credential not configured"
                );
            }
            return;
        }

        warn!(
            source = %self.kind(),
            input,
            error = %error,
            retryable = error.is_retryable(),
            "Source call failed, contributing no results"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    struct StubSource {
        delay: Duration,
        fail: bool,
        credential: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new() -> Self {
            Self {
                delay: Duration::ZERO,
                fail: false,
                credential: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FoodDataSource for StubSource {
        fn kind(&self) -> FoodSource {
            FoodSource::Usda
        }

        fn supports_barcode(&self) -> bool {
            true
        }

        fn missing_credential(&self) -> Option<&'static str> {
            self.credential
        }

        async fn fetch_search(&self, query: &str, limit: u32) -> SourceResult<Vec<FoodRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(SourceError::HttpStatus {
                    provider: FoodSource::Usda,
                    status: 500,
                });
            }
            Ok((0..limit + 5)
                .filter_map(|i| FoodRecord::new(FoodSource::Usda, i.to_string(), query))
                .collect())
        }

        async fn fetch_barcode(&self, barcode: &str) -> SourceResult<Option<FoodRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FoodRecord::new(FoodSource::Usda, barcode, "Scanned"))
        }
    }

    #[tokio::test]
    async fn test_results_truncated_to_page_size() {
        let adapter = SourceAdapter::new(Arc::new(StubSource::new()), Duration::from_secs(1), 3);
        assert_eq!(adapter.search("rice").await.len(), 3);
        assert!(adapter.lookup("0123").await.is_some());
    }

    #[tokio::test]
    async fn test_failure_becomes_empty() {
        let stub = StubSource {
            fail: true,
            ..StubSource::new()
        };
        let adapter = SourceAdapter::new(Arc::new(stub), Duration::from_secs(1), 10);
        assert!(adapter.search("rice").await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_empty() {
        let stub = StubSource {
            delay: Duration::from_secs(10),
            ..StubSource::new()
        };
        let adapter = SourceAdapter::new(Arc::new(stub), Duration::from_millis(100), 10);
        assert!(adapter.search("rice").await.is_empty());
    }

    #[tokio::test]
    async fn test_blank_input_skips_call() {
        let stub = Arc::new(StubSource::new());
        let adapter = SourceAdapter::new(stub.clone(), Duration::from_secs(1), 10);

        assert!(adapter.search("").await.is_empty());
        assert!(adapter.search("  \t").await.is_empty());
        assert!(adapter.lookup(" ").await.is_none());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_skips_call() {
        let stub = Arc::new(StubSource {
            credential: Some("USDA_API_KEY"),
            ..StubSource::new()
        });
        let adapter = SourceAdapter::new(stub.clone(), Duration::from_secs(1), 10);

        assert!(adapter.search("rice").await.is_empty());
        assert!(adapter.search("rice").await.is_empty());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_budget_skips_call() {
        let stub = Arc::new(StubSource::new());
        let adapter = SourceAdapter::new(stub.clone(), Duration::from_secs(1), 10)
            .with_budget(RequestBudget::per_minute(1));

        assert!(!adapter.search("rice").await.is_empty());
        assert!(adapter.search("rice").await.is_empty());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }
}
