// ABOUTME: Food search service facade: cached ranked name search, barcode lookup, per-source search
// ABOUTME: Owns the cache and aggregator for its lifetime; upstream failures never become errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::aggregator::Aggregator;
use super::dedup::dedupe;
use super::ranking::rank;
use super::similarity::group_similar;
use crate::cache::{CacheKey, InMemoryCache};
use crate::config::{EngineConfig, ScoringConfig};
use crate::constants::sources::DEFAULT_CONNECT_TIMEOUT_SECS;
use crate::errors::{AppError, AppResult};
use crate::models::{FoodRecord, FoodSource};
use crate::sources::{
    initialize_shared_client, FoodDataSource, NutritionixSource, OpenFoodFactsSource,
    RequestBudget, SourceAdapter, UsdaSource,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Name-search adapter priority
pub const NAME_SEARCH_PRIORITY: [FoodSource; 3] = FoodSource::ALL;

/// Barcode lookup priority
pub const BARCODE_PRIORITY: [FoodSource; 2] = [FoodSource::OpenFoodFacts, FoodSource::Nutritionix];

/// Entry point for food searches.
///
/// Construct once at startup and share; the cache and its sweep task live as
/// long as the service. Call [`FoodSearchService::shutdown`] to stop the
/// sweep early.
pub struct FoodSearchService {
    aggregator: Aggregator,
    cache: InMemoryCache,
    scoring: ScoringConfig,
}

impl FoodSearchService {
    /// Build a service over prepared adapters, given in name-search priority order
    #[must_use]
    pub fn new(adapters: Vec<SourceAdapter>, cache: InMemoryCache, scoring: ScoringConfig) -> Self {
        let adapters = adapters.into_iter().map(Arc::new).collect();
        Self {
            aggregator: Aggregator::new(adapters, cache.clone()),
            cache,
            scoring,
        }
    }

    /// Build the standard three-source service from configuration
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        initialize_shared_client(
            config.request_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        );

        let adapters = NAME_SEARCH_PRIORITY
            .iter()
            .map(|source| build_adapter(*source, config))
            .collect();

        Self::new(
            adapters,
            InMemoryCache::new(&config.cache),
            config.scoring.clone(),
        )
        .with_barcode_priority(&BARCODE_PRIORITY)
    }

    /// Override the order in which barcode-capable sources are tried
    #[must_use]
    pub fn with_barcode_priority(mut self, order: &[FoodSource]) -> Self {
        self.aggregator = self.aggregator.with_barcode_priority(order);
        self
    }

    /// Configured sources in name-search priority order
    #[must_use]
    pub fn sources(&self) -> Vec<FoodSource> {
        self.aggregator.sources()
    }

    /// The shared result cache
    #[must_use]
    pub const fn cache(&self) -> &InMemoryCache {
        &self.cache
    }

    /// Scoring configuration in use
    #[must_use]
    pub const fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Aggregated, identity-deduplicated, ranked results across all
    /// name-capable sources.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank query. Source failures never
    /// produce an error; at worst the list is empty.
    pub async fn search_food(&self, query: &str) -> AppResult<Vec<FoodRecord>> {
        let query = non_blank(query, "Search query")?;
        let key = CacheKey::search(query);
        if let Some(records) = self.cache.get::<Vec<FoodRecord>>(&key) {
            return Ok(records);
        }

        let started = Instant::now();
        let aggregated = self.aggregator.aggregate(query).await;
        let fetched = aggregated.len();
        let ranked = rank(dedupe(aggregated), query, &self.scoring);

        info!(
            query,
            fetched,
            results = ranked.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Food search completed"
        );
        if !ranked.is_empty() {
            self.store(&key, &ranked);
        }
        Ok(ranked)
    }

    /// First record found for a barcode, trying sources in barcode priority order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank barcode
    pub async fn fetch_food_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodRecord>> {
        let barcode = non_blank(barcode, "Barcode")?;
        let key = CacheKey::barcode(barcode);
        if let Some(record) = self.cache.get::<FoodRecord>(&key) {
            return Ok(Some(record));
        }

        let started = Instant::now();
        let record = self.aggregator.lookup_barcode(barcode).await;
        info!(
            barcode,
            found = record.is_some(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Barcode lookup completed"
        );
        if let Some(found) = &record {
            self.store(&key, found);
        }
        Ok(record)
    }

    /// One source's raw answer, independently cached.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank query and `ResourceNotFound` when
    /// the source is not configured on this service
    pub async fn search_source(
        &self,
        source: FoodSource,
        query: &str,
    ) -> AppResult<Vec<FoodRecord>> {
        let query = non_blank(query, "Search query")?;
        self.aggregator
            .search_source(source, query)
            .await
            .ok_or_else(|| AppError::not_found(format!("Source {source}")))
    }

    /// Ranked results grouped by likely-same food across sources
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank query
    pub async fn search_grouped(&self, query: &str) -> AppResult<Vec<Vec<FoodRecord>>> {
        let records = self.search_food(query).await?;
        Ok(group_similar(&records, &self.scoring))
    }

    /// Stop the cache sweep task. Cached entries remain readable.
    pub fn shutdown(&self) {
        debug!("Food search service shutting down");
        self.cache.shutdown();
    }

    fn store<T: Serialize + ?Sized>(&self, key: &CacheKey, value: &T) {
        if let Err(e) = self.cache.set(key, value) {
            warn!(cache_key = %key, error = %e, "Failed to cache result");
        }
    }
}

/// Wrap the production source for `source` with timeout, page size, and budget
fn build_adapter(source: FoodSource, config: &EngineConfig) -> SourceAdapter {
    let sources = &config.sources;
    let inner: Arc<dyn FoodDataSource> = match source {
        FoodSource::Nutritionix => Arc::new(NutritionixSource::new(sources.nutritionix.clone())),
        FoodSource::Usda => Arc::new(UsdaSource::new(sources.usda.clone())),
        FoodSource::OpenFoodFacts => {
            Arc::new(OpenFoodFactsSource::new(sources.open_food_facts.clone()))
        }
    };

    let adapter = SourceAdapter::new(inner, config.request_timeout, config.page_size);
    match source {
        FoodSource::Usda if sources.usda.rate_limit_per_minute > 0 => {
            adapter.with_budget(RequestBudget::per_minute(sources.usda.rate_limit_per_minute))
        }
        _ => adapter,
    }
}

fn non_blank<'a>(input: &'a str, what: &str) -> AppResult<&'a str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input(format!("{what} cannot be empty")));
    }
    Ok(trimmed)
}
