// ABOUTME: Documented constants re-exported from nutrisearch-core
// ABOUTME: Timeouts, cache TTLs, scoring weights, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrisearch_core::constants::*;
