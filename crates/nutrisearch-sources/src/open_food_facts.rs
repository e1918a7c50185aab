// ABOUTME: Open Food Facts adapter for the community barcode and product catalog
// ABOUTME: No credentials; field names vary per product so mapping walks ordered accessor lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::sources::open_food_facts::{BASE_URL, MAX_BARCODE_LEN};
use crate::constants::sources::{DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT};
use crate::core::FoodDataSource;
use crate::errors::{SourceError, SourceResult};
use crate::fields::{first_id, first_text, lookup, number_or_zero};
use crate::http_client::{read_json, send, shared_client};
use crate::models::{FoodRecord, FoodSource};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

const NAME_FIELDS: &[&str] = &[
    "product_name",
    "product_name_en",
    "generic_name",
    "abbreviated_product_name",
];
const BRAND_FIELDS: &[&str] = &["brands"];
const ID_FIELDS: &[&str] = &["code", "_id", "id"];
const CALORIE_FIELDS: &[&str] = &[
    "nutriments.energy-kcal_100g",
    "nutriments.energy-kcal",
    "nutriments.energy_kcal_100g",
    "nutriments.energy_kcal",
    "nutriments.calories",
];
const PROTEIN_FIELDS: &[&str] = &["nutriments.proteins_100g", "nutriments.proteins"];
const CARB_FIELDS: &[&str] = &["nutriments.carbohydrates_100g", "nutriments.carbohydrates"];
const FAT_FIELDS: &[&str] = &["nutriments.fat_100g", "nutriments.fat"];

/// Open Food Facts configuration
#[derive(Debug, Clone)]
pub struct OpenFoodFactsConfig {
    /// Base URL (default: <https://world.openfoodfacts.org>)
    pub base_url: String,
}

impl Default for OpenFoodFactsConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
        }
    }
}

/// Map one product object into a canonical record
#[must_use]
pub fn map_product(product: &Value) -> Option<FoodRecord> {
    let name = first_text(product, NAME_FIELDS)?;
    let code = first_id(product, ID_FIELDS)?;
    let brand = first_text(product, BRAND_FIELDS)
        .and_then(|brands| brands.split(',').map(str::trim).find(|b| !b.is_empty()));

    let record = FoodRecord::new(FoodSource::OpenFoodFacts, code.as_str(), name)?
        .with_brand(brand)
        .with_barcode(Some(code.as_str()))
        .with_macros(
            number_or_zero(product, CALORIE_FIELDS),
            number_or_zero(product, PROTEIN_FIELDS),
            number_or_zero(product, CARB_FIELDS),
            number_or_zero(product, FAT_FIELDS),
        )
        .with_serving(DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT);
    Some(record)
}

/// Map a search payload (`products[]`) into canonical records
#[must_use]
pub fn map_search_response(payload: &Value) -> Vec<FoodRecord> {
    payload
        .get("products")
        .and_then(Value::as_array)
        .map(|products| products.iter().filter_map(map_product).collect())
        .unwrap_or_default()
}

/// Map a product payload. `status: 0` means the catalog has no such product.
#[must_use]
pub fn map_product_response(payload: &Value) -> Option<FoodRecord> {
    if lookup(payload, "status").and_then(Value::as_i64) == Some(0) {
        return None;
    }
    map_product(payload.get("product")?)
}

/// Barcodes the catalog can hold: digits only, at most 14 of them
fn is_plausible_barcode(code: &str) -> bool {
    !code.is_empty() && code.len() <= MAX_BARCODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// Open Food Facts source
pub struct OpenFoodFactsSource {
    config: OpenFoodFactsConfig,
}

impl OpenFoodFactsSource {
    /// Create a source from configuration
    #[must_use]
    pub const fn new(config: OpenFoodFactsConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl FoodDataSource for OpenFoodFactsSource {
    fn kind(&self) -> FoodSource {
        FoodSource::OpenFoodFacts
    }

    fn supports_barcode(&self) -> bool {
        true
    }

    async fn fetch_search(&self, query: &str, limit: u32) -> SourceResult<Vec<FoodRecord>> {
        let url = format!("{}/cgi/search.pl", self.config.base_url);
        let request = shared_client().get(&url).query(&[
            ("search_terms", query),
            ("search_simple", "1"),
            ("action", "process"),
            ("json", "1"),
            ("page_size", &limit.to_string()),
        ]);

        let response = send(FoodSource::OpenFoodFacts, request).await?;
        let payload = read_json(FoodSource::OpenFoodFacts, response).await?;
        Ok(map_search_response(&payload))
    }

    async fn fetch_barcode(&self, barcode: &str) -> SourceResult<Option<FoodRecord>> {
        let code = barcode.trim();
        if !is_plausible_barcode(code) {
            return Ok(None);
        }

        let url = format!("{}/api/v2/product/{code}.json", self.config.base_url);
        let response = send(FoodSource::OpenFoodFacts, shared_client().get(&url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let payload = read_json(FoodSource::OpenFoodFacts, response).await?;
        if !payload.is_object() {
            return Err(SourceError::parse(
                FoodSource::OpenFoodFacts,
                "product payload is not an object",
            ));
        }
        Ok(map_product_response(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_product_with_fallback_fields() {
        let product = json!({
            "code": "04963406",
            "product_name": "",
            "product_name_en": "Cola Drink",
            "brands": "Fizz Co, Fizz Holdings",
            "nutriments": {
                "energy-kcal": "250",
                "proteins_100g": 0,
                "carbohydrates": 62.5,
                "fat_100g": null
            }
        });

        let record = map_product(&product).unwrap();
        assert_eq!(record.name(), "Cola Drink");
        assert_eq!(record.brand(), Some("Fizz Co"));
        assert_eq!(record.barcode(), Some("04963406"));
        assert_eq!(record.source_id(), "04963406");
        assert!((record.calories() - 250.0).abs() < f64::EPSILON);
        assert!((record.carbs() - 62.5).abs() < f64::EPSILON);
        assert!((record.fat() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nameless_products_are_dropped() {
        let payload = json!({
            "count": 2,
            "products": [
                {"code": "1", "nutriments": {"energy-kcal_100g": 10}},
                {"code": "2", "product_name": "Rice Cakes"}
            ]
        });

        let records = map_search_response(&payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Rice Cakes");
    }

    #[test]
    fn test_product_not_found_status() {
        let payload = json!({"status": 0, "status_verbose": "product not found"});
        assert!(map_product_response(&payload).is_none());
        assert!(map_search_response(&json!({})).is_empty());
    }

    #[test]
    fn test_barcode_plausibility() {
        assert!(is_plausible_barcode("04963406"));
        assert!(!is_plausible_barcode("12345678901234567"));
        assert!(!is_plausible_barcode("abc123"));
        assert!(!is_plausible_barcode(""));
    }
}
