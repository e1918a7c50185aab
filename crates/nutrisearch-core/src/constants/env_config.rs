// ABOUTME: Environment variable names for environment-only configuration
// ABOUTME: Shared between the engine configuration loader and its documentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// USDA `FoodData` Central API key
pub const USDA_API_KEY: &str = "USDA_API_KEY";
/// USDA base URL override
pub const USDA_BASE_URL: &str = "USDA_BASE_URL";
/// USDA requests allowed per minute (0 disables the budget)
pub const USDA_RATE_LIMIT_PER_MINUTE: &str = "USDA_RATE_LIMIT_PER_MINUTE";

/// Nutritionix application id
pub const NUTRITIONIX_APP_ID: &str = "NUTRITIONIX_APP_ID";
/// Nutritionix application key
pub const NUTRITIONIX_APP_KEY: &str = "NUTRITIONIX_APP_KEY";
/// Nutritionix base URL override
pub const NUTRITIONIX_BASE_URL: &str = "NUTRITIONIX_BASE_URL";

/// Open Food Facts base URL override
pub const OPEN_FOOD_FACTS_BASE_URL: &str = "OPEN_FOOD_FACTS_BASE_URL";

/// Per-call timeout for every adapter
pub const REQUEST_TIMEOUT_SECS: &str = "NUTRISEARCH_REQUEST_TIMEOUT_SECS";
/// Results requested from each source per search
pub const PAGE_SIZE: &str = "NUTRISEARCH_PAGE_SIZE";

/// Cache TTL in seconds
pub const CACHE_TTL_SECS: &str = "CACHE_TTL_SECS";
/// Background sweep interval in seconds
pub const CACHE_SWEEP_INTERVAL_SECS: &str = "CACHE_SWEEP_INTERVAL_SECS";
/// Maximum number of cache entries
pub const CACHE_MAX_ENTRIES: &str = "CACHE_MAX_ENTRIES";
