// ABOUTME: Core data models for the aggregation engine
// ABOUTME: Canonical food record shared by every source adapter and pipeline stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Canonical food record and source identifiers
pub mod food;

pub use food::{FoodRecord, FoodSource, NutritionPer100, GENERATED_ID_PREFIX};
