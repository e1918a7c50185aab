// ABOUTME: Canonical food record and source identifier re-exported from nutrisearch-core
// ABOUTME: Every adapter maps its provider payload into these types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrisearch_core::models::*;
