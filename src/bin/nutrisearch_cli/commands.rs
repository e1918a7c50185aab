// ABOUTME: Subcommand handlers for nutrisearch-cli
// ABOUTME: Calls the search service and hands results to the display helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutrisearch::models::FoodSource;
use nutrisearch::search::FoodSearchService;

use crate::display::{print_groups, print_json, print_record, print_records};

/// Ranked search, or one source's raw answer when `source` is given
pub async fn search(
    service: &FoodSearchService,
    query: &str,
    source: Option<FoodSource>,
    json: bool,
    limit: usize,
) -> Result<()> {
    let mut records = match source {
        Some(source) => service.search_source(source, query).await?,
        None => service.search_food(query).await?,
    };
    records.truncate(limit);

    if json {
        print_json(&records)
    } else {
        print_records(query, &records);
        Ok(())
    }
}

/// Barcode lookup across barcode-capable sources
pub async fn barcode(service: &FoodSearchService, code: &str, json: bool) -> Result<()> {
    let record = service.fetch_food_by_barcode(code).await?;

    if json {
        return print_json(&record);
    }
    match record {
        Some(record) => print_record(1, &record),
        None => println!("No product found for barcode {code}"),
    }
    Ok(())
}

/// Ranked search grouped by likely-same food
pub async fn groups(service: &FoodSearchService, query: &str) -> Result<()> {
    let groups = service.search_grouped(query).await?;
    print_groups(query, &groups);
    Ok(())
}
