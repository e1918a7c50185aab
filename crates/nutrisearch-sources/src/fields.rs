// ABOUTME: Ordered field accessors for provider payloads whose field names vary per item
// ABOUTME: First present, coercible field in the priority list wins; absent numbers default to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field lookup over loosely-shaped JSON.
//!
//! Paths are dot-separated object keys (`"nutriments.energy-kcal_100g"`).
//! Provider modules declare their priority lists as `&[&str]` constants and
//! resolve them with the helpers here, so every fallback order is data rather
//! than control flow.

use serde_json::Value;

/// Resolve a dot-separated path
#[must_use]
pub fn lookup<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(item, |node, key| node.get(key))
}

/// Coerce a JSON number or numeric string to a finite `f64`
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// First path in `paths` that holds a coercible number
#[must_use]
pub fn first_number(item: &Value, paths: &[&str]) -> Option<f64> {
    paths
        .iter()
        .find_map(|path| lookup(item, path).and_then(coerce_number))
}

/// Like [`first_number`], defaulting to zero when no path matches
#[must_use]
pub fn number_or_zero(item: &Value, paths: &[&str]) -> f64 {
    first_number(item, paths).unwrap_or(0.0)
}

/// First path in `paths` that holds a non-blank string
#[must_use]
pub fn first_text<'a>(item: &'a Value, paths: &[&str]) -> Option<&'a str> {
    paths.iter().find_map(|path| {
        lookup(item, path)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    })
}

/// First path in `paths` that holds an identifier, either a string or an integer
#[must_use]
pub fn first_id(item: &Value, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| match lookup(item, path)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
