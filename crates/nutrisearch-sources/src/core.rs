// ABOUTME: Core trait implemented by every external food database adapter
// ABOUTME: Fetch methods report typed failures; the adapter boundary decides how to absorb them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{SourceError, SourceResult};
use crate::models::{FoodRecord, FoodSource};
use async_trait::async_trait;

/// One external food database.
///
/// Implementations issue exactly one outbound call per fetch and map the
/// provider payload into canonical [`FoodRecord`]s. They do not apply timeouts,
/// budgets, or logging; [`crate::SourceAdapter`] does that uniformly.
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Which source this is
    fn kind(&self) -> FoodSource;

    /// Whether the source answers free-text name searches
    fn supports_name_search(&self) -> bool {
        true
    }

    /// Whether the source answers barcode lookups
    fn supports_barcode(&self) -> bool {
        false
    }

    /// Environment variable that must be set before the source can be used,
    /// or `None` when the source is usable as configured
    fn missing_credential(&self) -> Option<&'static str> {
        None
    }

    /// Search by free text, returning at most `limit` records
    async fn fetch_search(&self, query: &str, limit: u32) -> SourceResult<Vec<FoodRecord>>;

    /// Look up a single product by barcode
    async fn fetch_barcode(&self, _barcode: &str) -> SourceResult<Option<FoodRecord>> {
        Err(SourceError::Unsupported {
            provider: self.kind(),
            operation: "barcode lookup",
        })
    }
}
