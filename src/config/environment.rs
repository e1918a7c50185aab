// ABOUTME: Environment-based configuration for the engine, its sources, and the result cache
// ABOUTME: Every setting has a documented default; credentials are optional and disable their source when absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ScoringConfig;
use crate::cache::CacheConfig;
use crate::constants::env_config;
use crate::constants::sources::{
    nutritionix, open_food_facts, usda, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_PAGE_SIZE,
};
use crate::errors::{AppError, AppResult};
use crate::sources::{NutritionixConfig, OpenFoodFactsConfig, UsdaConfig};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Per-source connection settings
#[derive(Debug, Clone, Default)]
pub struct SourcesConfig {
    /// Nutritionix credentials and endpoint
    pub nutritionix: NutritionixConfig,
    /// USDA `FoodData` Central key, endpoint, and request budget
    pub usda: UsdaConfig,
    /// Open Food Facts endpoint
    pub open_food_facts: OpenFoodFactsConfig,
}

impl SourcesConfig {
    /// Load source settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `USDA_RATE_LIMIT_PER_MINUTE` is not a number
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            nutritionix: NutritionixConfig {
                app_id: env_opt(env_config::NUTRITIONIX_APP_ID),
                app_key: env_opt(env_config::NUTRITIONIX_APP_KEY),
                base_url: env_var_or(env_config::NUTRITIONIX_BASE_URL, nutritionix::BASE_URL),
            },
            usda: UsdaConfig {
                api_key: env_opt(env_config::USDA_API_KEY),
                base_url: env_var_or(env_config::USDA_BASE_URL, usda::BASE_URL),
                rate_limit_per_minute: env_parse(
                    env_config::USDA_RATE_LIMIT_PER_MINUTE,
                    usda::DEFAULT_RATE_LIMIT_PER_MINUTE,
                )?,
            },
            open_food_facts: OpenFoodFactsConfig {
                base_url: env_var_or(
                    env_config::OPEN_FOOD_FACTS_BASE_URL,
                    open_food_facts::BASE_URL,
                ),
            },
        })
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Source credentials and endpoints
    pub sources: SourcesConfig,
    /// Result cache settings
    pub cache: CacheConfig,
    /// Relevance scoring constants
    pub scoring: ScoringConfig,
    /// Timeout for each outbound source call (default: 3 seconds)
    pub request_timeout: Duration,
    /// Maximum records requested from each source (default: 25)
    pub page_size: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            cache: CacheConfig::default(),
            scoring: ScoringConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the request
    /// timeout is zero
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let timeout_secs: u64 =
            env_parse(env_config::REQUEST_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::REQUEST_TIMEOUT_SECS
            )));
        }

        let page_size: u32 = env_parse(env_config::PAGE_SIZE, DEFAULT_PAGE_SIZE)?;
        let defaults = CacheConfig::default();

        let config = Self {
            sources: SourcesConfig::from_env()?,
            cache: CacheConfig {
                ttl: Duration::from_secs(env_parse(
                    env_config::CACHE_TTL_SECS,
                    defaults.ttl.as_secs(),
                )?),
                sweep_interval: Duration::from_secs(env_parse(
                    env_config::CACHE_SWEEP_INTERVAL_SECS,
                    defaults.sweep_interval.as_secs(),
                )?),
                max_entries: env_parse(env_config::CACHE_MAX_ENTRIES, defaults.max_entries)?,
                enable_background_sweep: defaults.enable_background_sweep,
            },
            scoring: ScoringConfig::default(),
            request_timeout: Duration::from_secs(timeout_secs),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        };

        config.log_summary();
        Ok(config)
    }

    /// Log which sources are usable, without credentials
    fn log_summary(&self) {
        let nutritionix = &self.sources.nutritionix;
        info!(
            nutritionix = nutritionix.app_id.is_some() && nutritionix.app_key.is_some(),
            usda = self.sources.usda.api_key.is_some(),
            usda_rate_limit = self.sources.usda.rate_limit_per_minute,
            open_food_facts = true,
            request_timeout_secs = self.request_timeout.as_secs(),
            page_size = self.page_size,
            cache_ttl_secs = self.cache.ttl.as_secs(),
            "Engine configuration loaded"
        );
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_owned())
}

/// Get a non-blank environment variable
fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    env_opt(key).map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
    })
}
