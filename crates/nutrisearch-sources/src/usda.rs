// ABOUTME: USDA FoodData Central adapter for authoritative per-100g nutrient data
// ABOUTME: Name search only; requires a free API key passed as a query parameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # USDA `FoodData` Central
//!
//! Search endpoint: `GET {base_url}/foods/search?query=&pageSize=&api_key=`.
//! Nutrient values in search results are per 100 g, so every record carries a
//! 100 g serving. Get an API key at <https://fdc.nal.usda.gov/api-key-signup.html>.

use crate::constants::env_config;
use crate::constants::sources::usda::{
    BASE_URL, CARBS_NUTRIENT_IDS, CARBS_NUTRIENT_NUMBER, DEFAULT_RATE_LIMIT_PER_MINUTE,
    ENERGY_NUTRIENT_IDS, ENERGY_NUTRIENT_NUMBER, FAT_NUTRIENT_IDS, FAT_NUTRIENT_NUMBER,
    PROTEIN_NUTRIENT_IDS, PROTEIN_NUTRIENT_NUMBER,
};
use crate::constants::sources::{DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT};
use crate::core::FoodDataSource;
use crate::errors::{SourceError, SourceResult};
use crate::http_client::{read_json, send, shared_client};
use crate::models::{FoodRecord, FoodSource};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// USDA client configuration
#[derive(Debug, Clone)]
pub struct UsdaConfig {
    /// API key; the source is disabled while this is `None`
    pub api_key: Option<String>,
    /// Base URL (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Local request budget per minute (default: 30, 0 disables the budget)
    pub rate_limit_per_minute: u32,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: BASE_URL.to_owned(),
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
        }
    }
}

/// Search response envelope. Items are decoded one at a time so a single
/// malformed food does not discard the page.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    fdc_id: u64,
    #[serde(default)]
    description: String,
    brand_name: Option<String>,
    brand_owner: Option<String>,
    gtin_upc: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodNutrient {
    nutrient_id: Option<u64>,
    nutrient_number: Option<String>,
    value: Option<f64>,
    amount: Option<f64>,
}

impl FoodNutrient {
    fn reading(&self) -> Option<f64> {
        self.value.or(self.amount)
    }
}

impl SearchFood {
    /// First nutrient matching one of `ids`, or the legacy nutrient number
    fn nutrient(&self, ids: &[u64], number: &str) -> f64 {
        let by_id = ids.iter().find_map(|id| {
            self.food_nutrients
                .iter()
                .find(|n| n.nutrient_id == Some(*id))
                .and_then(FoodNutrient::reading)
        });
        by_id
            .or_else(|| {
                self.food_nutrients
                    .iter()
                    .find(|n| n.nutrient_number.as_deref() == Some(number))
                    .and_then(FoodNutrient::reading)
            })
            .unwrap_or(0.0)
    }

    fn into_record(self) -> Option<FoodRecord> {
        let brand = self
            .brand_name
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .or(self.brand_owner.as_deref());

        let record = FoodRecord::new(FoodSource::Usda, self.fdc_id.to_string(), &self.description)?
            .with_brand(brand)
            .with_barcode(self.gtin_upc.as_deref())
            .with_macros(
                self.nutrient(ENERGY_NUTRIENT_IDS, ENERGY_NUTRIENT_NUMBER),
                self.nutrient(PROTEIN_NUTRIENT_IDS, PROTEIN_NUTRIENT_NUMBER),
                self.nutrient(CARBS_NUTRIENT_IDS, CARBS_NUTRIENT_NUMBER),
                self.nutrient(FAT_NUTRIENT_IDS, FAT_NUTRIENT_NUMBER),
            )
            .with_serving(DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT);
        Some(record)
    }
}

/// Map a USDA search payload into canonical records
///
/// # Errors
///
/// Returns a parse error when the envelope itself is not a search response.
pub fn map_search_response(payload: Value) -> SourceResult<Vec<FoodRecord>> {
    let response: SearchResponse = serde_json::from_value(payload)
        .map_err(|e| SourceError::parse(FoodSource::Usda, e.to_string()))?;

    Ok(response
        .foods
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<SearchFood>(item) {
            Ok(food) => food.into_record(),
            Err(e) => {
                debug!(source = %FoodSource::Usda, error = %e, "Skipping malformed food item");
                None
            }
        })
        .collect())
}

/// USDA `FoodData` Central source
pub struct UsdaSource {
    config: UsdaConfig,
}

impl UsdaSource {
    /// Create a source from configuration
    #[must_use]
    pub const fn new(config: UsdaConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl FoodDataSource for UsdaSource {
    fn kind(&self) -> FoodSource {
        FoodSource::Usda
    }

    fn missing_credential(&self) -> Option<&'static str> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => None,
            _ => Some(env_config::USDA_API_KEY),
        }
    }

    async fn fetch_search(&self, query: &str, limit: u32) -> SourceResult<Vec<FoodRecord>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials {
                provider: FoodSource::Usda,
                variable: env_config::USDA_API_KEY,
            })?;

        let url = format!("{}/foods/search", self.config.base_url);
        let request = shared_client().get(&url).query(&[
            ("query", query),
            ("pageSize", &limit.to_string()),
            ("api_key", api_key),
        ]);

        let response = send(FoodSource::Usda, request).await?;
        let payload = read_json(FoodSource::Usda, response).await?;
        map_search_response(payload)
    }
}
