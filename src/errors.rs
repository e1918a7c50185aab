// ABOUTME: Unified error handling re-exported from nutrisearch-core
// ABOUTME: AppError with ErrorCode for callers, SourceError for adapter-level failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrisearch_core::errors::*;
