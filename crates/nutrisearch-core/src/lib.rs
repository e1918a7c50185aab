// ABOUTME: Core types and constants for the nutrisearch food aggregation engine
// ABOUTME: Foundation crate with error handling, the canonical food record, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrisearch Core
//!
//! Foundation crate providing the types every other crate in the workspace
//! agrees on. It is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `SourceError`
//! - **constants**: Timeouts, cache lifetimes, scoring weights, provider endpoints
//! - **models**: The canonical `FoodRecord` and the closed `FoodSource` set

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Canonical food record and source identifiers
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode, SourceError, SourceResult};
pub use models::{FoodRecord, FoodSource, NutritionPer100};
