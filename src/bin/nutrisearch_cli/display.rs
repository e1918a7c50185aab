// ABOUTME: Output formatting helpers for nutrisearch-cli
// ABOUTME: Renders food records as aligned text or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutrisearch::models::FoodRecord;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One record as a numbered two-line entry
pub fn print_record(position: usize, record: &FoodRecord) {
    let brand = record
        .brand()
        .map(|brand| format!(" [{brand}]"))
        .unwrap_or_default();
    println!("{position:>3}. {}{brand}", record.name());
    println!(
        "     {:.0} kcal  P {:.1}g  C {:.1}g  F {:.1}g  per {} {}  ({} {})",
        record.calories(),
        record.protein(),
        record.carbs(),
        record.fat(),
        record.serving_size(),
        record.serving_unit(),
        record.source(),
        record.source_id(),
    );
}

pub fn print_records(query: &str, records: &[FoodRecord]) {
    if records.is_empty() {
        println!("No foods found for \"{query}\"");
        return;
    }
    println!("{} result(s) for \"{query}\"", records.len());
    println!("{}", "=".repeat(72));
    for (index, record) in records.iter().enumerate() {
        print_record(index + 1, record);
    }
}

pub fn print_groups(query: &str, groups: &[Vec<FoodRecord>]) {
    if groups.is_empty() {
        println!("No foods found for \"{query}\"");
        return;
    }
    for (index, group) in groups.iter().enumerate() {
        println!("Group {} ({} source(s))", index + 1, group.len());
        println!("{}", "-".repeat(72));
        for (position, record) in group.iter().enumerate() {
            print_record(position + 1, record);
        }
    }
}
