// ABOUTME: Food database source adapters for Nutritionix, USDA FoodData Central, and Open Food Facts
// ABOUTME: Source trait, never-failing adapter boundary, shared HTTP client, and field mapping helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food database adapters and their shared plumbing.
//!
//! Each provider module implements [`FoodDataSource`], whose fetch methods
//! report failures as [`SourceError`]. The [`SourceAdapter`] wrapper is the
//! boundary the rest of the engine talks to: it applies the per-call timeout
//! and request budget, logs failures, and turns every failure into an empty
//! result.

// Re-export nutrisearch-core modules so provider files can use `crate::errors::*` etc.
pub use nutrisearch_core::constants;
pub use nutrisearch_core::errors;
pub use nutrisearch_core::models;

/// Never-failing boundary wrapper around a source
pub mod adapter;
/// Sliding-window request budget per source
pub mod budget;
/// Core source trait
pub mod core;
/// Ordered field accessors over loosely-shaped JSON payloads
pub mod fields;
/// Shared HTTP client and response helpers
pub mod http_client;

/// Nutritionix adapter (commercial, name + barcode)
pub mod nutritionix;
/// Open Food Facts adapter (community catalog, name + barcode)
pub mod open_food_facts;
/// USDA `FoodData` Central adapter (authoritative, name only)
pub mod usda;

pub use adapter::SourceAdapter;
pub use budget::RequestBudget;
pub use core::FoodDataSource;
pub use http_client::{initialize_shared_client, shared_client};
pub use nutrisearch_core::errors::{SourceError, SourceResult};
pub use nutritionix::{NutritionixConfig, NutritionixSource};
pub use open_food_facts::{OpenFoodFactsConfig, OpenFoodFactsSource};
pub use usda::{UsdaConfig, UsdaSource};
