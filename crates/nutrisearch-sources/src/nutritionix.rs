// ABOUTME: Nutritionix adapter for pre-normalized commercial food and restaurant data
// ABOUTME: Requires app id and key headers; supports name search and UPC lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::env_config;
use crate::constants::sources::nutritionix::{
    APP_ID_HEADER, APP_KEY_HEADER, ATTR_CARBS, ATTR_ENERGY, ATTR_FAT, ATTR_PROTEIN, BASE_URL,
};
use crate::constants::sources::{DEFAULT_SERVING_SIZE, DEFAULT_SERVING_UNIT};
use crate::core::FoodDataSource;
use crate::errors::{SourceError, SourceResult};
use crate::fields::{coerce_number, first_id, first_number, first_text, lookup};
use crate::http_client::{read_json, send, shared_client};
use crate::models::{FoodRecord, FoodSource};
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;

/// Where a macro value can come from in a Nutritionix food
#[derive(Debug, Clone, Copy)]
enum Accessor {
    /// Top-level `nf_*` field
    Field(&'static str),
    /// Entry of `full_nutrients[]` with this `attr_id`
    FullNutrient(u64),
}

impl Accessor {
    fn read(self, food: &Value) -> Option<f64> {
        match self {
            Self::Field(path) => lookup(food, path).and_then(coerce_number),
            Self::FullNutrient(attr) => food
                .get("full_nutrients")?
                .as_array()?
                .iter()
                .find(|n| n.get("attr_id").and_then(Value::as_u64) == Some(attr))
                .and_then(|n| n.get("value"))
                .and_then(coerce_number),
        }
    }
}

const NAME_FIELDS: &[&str] = &["food_name"];
const BRAND_FIELDS: &[&str] = &["brand_name", "brand_name_item_name"];
const BARCODE_FIELDS: &[&str] = &["upc"];
const ID_FIELDS: &[&str] = &["nix_item_id", "tag_id"];
const CALORIES: &[Accessor] = &[
    Accessor::Field("nf_calories"),
    Accessor::FullNutrient(ATTR_ENERGY),
];
const PROTEIN: &[Accessor] = &[
    Accessor::Field("nf_protein"),
    Accessor::FullNutrient(ATTR_PROTEIN),
];
const CARBS: &[Accessor] = &[
    Accessor::Field("nf_total_carbohydrate"),
    Accessor::FullNutrient(ATTR_CARBS),
];
const FAT: &[Accessor] = &[Accessor::Field("nf_total_fat"), Accessor::FullNutrient(ATTR_FAT)];

fn macro_value(food: &Value, accessors: &[Accessor]) -> f64 {
    accessors
        .iter()
        .find_map(|accessor| accessor.read(food))
        .unwrap_or(0.0)
}

/// Map one Nutritionix food object into a canonical record.
///
/// `position` is the item's index in its response and keeps generated ids
/// unique when several id-less items share a name.
#[must_use]
pub fn map_food(food: &Value, position: usize) -> Option<FoodRecord> {
    let name = first_text(food, NAME_FIELDS)?;
    let source_id =
        first_id(food, ID_FIELDS).unwrap_or_else(|| FoodRecord::generated_id(name, position));

    let (serving_size, serving_unit) = match first_text(food, &["serving_unit"]) {
        Some(unit) => (
            first_number(food, &["serving_qty"]).unwrap_or(DEFAULT_SERVING_SIZE),
            unit,
        ),
        None => (
            first_number(food, &["serving_weight_grams"]).unwrap_or(DEFAULT_SERVING_SIZE),
            DEFAULT_SERVING_UNIT,
        ),
    };

    let record = FoodRecord::new(FoodSource::Nutritionix, source_id, name)?
        .with_brand(first_text(food, BRAND_FIELDS))
        .with_barcode(first_text(food, BARCODE_FIELDS))
        .with_macros(
            macro_value(food, CALORIES),
            macro_value(food, PROTEIN),
            macro_value(food, CARBS),
            macro_value(food, FAT),
        )
        .with_serving(serving_size, serving_unit);
    Some(record)
}

/// Map an instant-search payload: `common[]` first, then `branded[]`
#[must_use]
pub fn map_search_response(payload: &Value, limit: usize) -> Vec<FoodRecord> {
    ["common", "branded"]
        .iter()
        .filter_map(|section| payload.get(section).and_then(Value::as_array))
        .flatten()
        .enumerate()
        .filter_map(|(position, food)| map_food(food, position))
        .take(limit)
        .collect()
}

/// Map an item payload: the first entry of `foods[]`
#[must_use]
pub fn map_item_response(payload: &Value) -> Option<FoodRecord> {
    payload
        .get("foods")?
        .as_array()?
        .first()
        .and_then(|food| map_food(food, 0))
}

/// Nutritionix configuration
#[derive(Debug, Clone)]
pub struct NutritionixConfig {
    /// Application id; the source is disabled while this is `None`
    pub app_id: Option<String>,
    /// Application key; the source is disabled while this is `None`
    pub app_key: Option<String>,
    /// Base URL (default: <https://trackapi.nutritionix.com>)
    pub base_url: String,
}

impl Default for NutritionixConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: BASE_URL.to_owned(),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Nutritionix source
pub struct NutritionixSource {
    config: NutritionixConfig,
}

impl NutritionixSource {
    /// Create a source from configuration
    #[must_use]
    pub const fn new(config: NutritionixConfig) -> Self {
        Self { config }
    }

    fn credentials(&self) -> SourceResult<(&str, &str)> {
        let missing = |variable| SourceError::MissingCredentials {
            provider: FoodSource::Nutritionix,
            variable,
        };
        let app_id = present(self.config.app_id.as_deref())
            .ok_or_else(|| missing(env_config::NUTRITIONIX_APP_ID))?;
        let app_key = present(self.config.app_key.as_deref())
            .ok_or_else(|| missing(env_config::NUTRITIONIX_APP_KEY))?;
        Ok((app_id, app_key))
    }

    fn authorized(&self, request: RequestBuilder) -> SourceResult<RequestBuilder> {
        let (app_id, app_key) = self.credentials()?;
        Ok(request
            .header(APP_ID_HEADER, app_id)
            .header(APP_KEY_HEADER, app_key))
    }
}

#[async_trait]
impl FoodDataSource for NutritionixSource {
    fn kind(&self) -> FoodSource {
        FoodSource::Nutritionix
    }

    fn supports_barcode(&self) -> bool {
        true
    }

    fn missing_credential(&self) -> Option<&'static str> {
        match self.credentials() {
            Err(SourceError::MissingCredentials { variable, .. }) => Some(variable),
            _ => None,
        }
    }

    async fn fetch_search(&self, query: &str, limit: u32) -> SourceResult<Vec<FoodRecord>> {
        let url = format!("{}/v2/search/instant", self.config.base_url);
        let request = self.authorized(
            shared_client()
                .get(&url)
                .query(&[("query", query), ("detailed", "true")]),
        )?;

        let response = send(FoodSource::Nutritionix, request).await?;
        let payload = read_json(FoodSource::Nutritionix, response).await?;
        Ok(map_search_response(&payload, limit as usize))
    }

    async fn fetch_barcode(&self, barcode: &str) -> SourceResult<Option<FoodRecord>> {
        let url = format!("{}/v2/search/item", self.config.base_url);
        let request =
            self.authorized(shared_client().get(&url).query(&[("upc", barcode.trim())]))?;

        let response = send(FoodSource::Nutritionix, request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload = read_json(FoodSource::Nutritionix, response).await?;
        Ok(map_item_response(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_branded_item_with_serving() {
        let food = json!({
            "food_name": "Grilled Chicken Sandwich",
            "brand_name": "Chick Shack",
            "nix_item_id": "5a1b2c",
            "upc": "012345678905",
            "serving_qty": 1,
            "serving_unit": " Sandwich ",
            "nf_calories": 380,
            "nf_protein": "37",
            "nf_total_carbohydrate": 44,
            "nf_total_fat": 6
        });

        let record = map_food(&food, 0).unwrap();
        assert_eq!(record.source_id(), "5a1b2c");
        assert_eq!(record.brand(), Some("Chick Shack"));
        assert_eq!(record.barcode(), Some("012345678905"));
        assert!((record.protein() - 37.0).abs() < f64::EPSILON);
        assert!((record.serving_size() - 1.0).abs() < f64::EPSILON);
        assert_eq!(record.serving_unit(), "sandwich");
    }

    #[test]
    fn test_full_nutrients_fallback_and_generated_id() {
        let food = json!({
            "food_name": "banana",
            "serving_weight_grams": 118,
            "full_nutrients": [
                {"attr_id": 208, "value": 105},
                {"attr_id": 205, "value": 27}
            ]
        });

        let record = map_food(&food, 0).unwrap();
        assert!(record.has_generated_id());
        assert!((record.calories() - 105.0).abs() < f64::EPSILON);
        assert!((record.carbs() - 27.0).abs() < f64::EPSILON);
        assert!((record.serving_size() - 118.0).abs() < f64::EPSILON);
        assert_eq!(record.serving_unit(), "g");
    }

    #[test]
    fn test_search_orders_common_before_branded() {
        let payload = json!({
            "branded": [{"food_name": "Branded Oats", "nix_item_id": "b1"}],
            "common": [
                {"food_name": "oats", "tag_id": 4021},
                {"food_name": ""}
            ]
        });

        let records = map_search_response(&payload, 10);
        let names: Vec<&str> = records.iter().map(FoodRecord::name).collect();
        assert_eq!(names, vec!["oats", "Branded Oats"]);
        assert_eq!(records[0].source_id(), "4021");
        assert_eq!(map_search_response(&payload, 1).len(), 1);
    }

    #[test]
    fn test_same_name_items_without_ids_stay_distinct() {
        let payload = json!({
            "common": [
                {"food_name": "grilled chicken", "serving_weight_grams": 100, "nf_calories": 165},
                {"food_name": "grilled chicken", "serving_weight_grams": 85, "nf_calories": 140}
            ]
        });

        let records = map_search_response(&payload, 10);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(FoodRecord::has_generated_id));
        assert_ne!(records[0].identity_key(), records[1].identity_key());
    }

    #[test]
    fn test_item_response_and_credentials() {
        assert!(map_item_response(&json!({"foods": []})).is_none());

        let partial = NutritionixSource::new(NutritionixConfig {
            app_id: Some("id".to_owned()),
            ..NutritionixConfig::default()
        });
        assert_eq!(partial.missing_credential(), Some("NUTRITIONIX_APP_KEY"));

        let configured = NutritionixSource::new(NutritionixConfig {
            app_id: Some("id".to_owned()),
            app_key: Some("key".to_owned()),
            ..NutritionixConfig::default()
        });
        assert_eq!(configured.missing_credential(), None);
    }
}
