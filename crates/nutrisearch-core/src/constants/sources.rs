// ABOUTME: External food database constants: endpoints, timeouts, page sizes, nutrient ids
// ABOUTME: Values documented by each provider's public API reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-call timeout applied to every adapter invocation
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 3;

/// Connection timeout for the shared HTTP client
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 2;

/// Results requested from each source per name search
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest page size any supported provider accepts
pub const MAX_PAGE_SIZE: u32 = 200;

/// User agent sent to every provider (Open Food Facts requires one)
pub const USER_AGENT: &str = concat!("nutrisearch/", env!("CARGO_PKG_VERSION"));

/// Default serving size used when a provider reports nutrition per 100 units
pub const DEFAULT_SERVING_SIZE: f64 = 100.0;

/// Default serving unit
pub const DEFAULT_SERVING_UNIT: &str = "g";

/// USDA `FoodData` Central
pub mod usda {
    /// Base URL for USDA API
    pub const BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
    /// Requests per minute allowed by the free tier
    pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 30;

    /// Energy (kcal), Atwater general and specific factor variants
    pub const ENERGY_NUTRIENT_IDS: &[u64] = &[1008, 2047, 2048];
    /// Protein
    pub const PROTEIN_NUTRIENT_IDS: &[u64] = &[1003];
    /// Carbohydrate, by difference
    pub const CARBS_NUTRIENT_IDS: &[u64] = &[1005];
    /// Total lipid (fat)
    pub const FAT_NUTRIENT_IDS: &[u64] = &[1004];

    /// Legacy SR nutrient numbers for the same nutrients
    pub const ENERGY_NUTRIENT_NUMBER: &str = "208";
    /// Protein nutrient number
    pub const PROTEIN_NUTRIENT_NUMBER: &str = "203";
    /// Carbohydrate nutrient number
    pub const CARBS_NUTRIENT_NUMBER: &str = "205";
    /// Fat nutrient number
    pub const FAT_NUTRIENT_NUMBER: &str = "204";
}

/// Nutritionix
pub mod nutritionix {
    /// Base URL for Nutritionix API
    pub const BASE_URL: &str = "https://trackapi.nutritionix.com";
    /// Header carrying the application id
    pub const APP_ID_HEADER: &str = "x-app-id";
    /// Header carrying the application key
    pub const APP_KEY_HEADER: &str = "x-app-key";

    /// `full_nutrients` attribute id for energy (kcal)
    pub const ATTR_ENERGY: u64 = 208;
    /// `full_nutrients` attribute id for protein
    pub const ATTR_PROTEIN: u64 = 203;
    /// `full_nutrients` attribute id for carbohydrate
    pub const ATTR_CARBS: u64 = 205;
    /// `full_nutrients` attribute id for fat
    pub const ATTR_FAT: u64 = 204;
}

/// Open Food Facts
pub mod open_food_facts {
    /// Base URL for Open Food Facts
    pub const BASE_URL: &str = "https://world.openfoodfacts.org";
    /// Longest barcode (GTIN-14) accepted by the product endpoint
    pub const MAX_BARCODE_LEN: usize = 14;
}
