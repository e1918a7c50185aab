// ABOUTME: Nutrisearch CLI - command-line front end for the food search engine
// ABOUTME: Runs ranked name searches, barcode lookups, and cross-source grouping from the shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Ranked search across every configured source
//! nutrisearch-cli search "greek yogurt"
//!
//! # Raw answer from a single source, as JSON
//! nutrisearch-cli search oats --source usda --json
//!
//! # Barcode lookup
//! nutrisearch-cli barcode 04963406
//!
//! # Ranked results grouped by likely-same food
//! nutrisearch-cli groups banana
//! ```

mod commands;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrisearch::config::EngineConfig;
use nutrisearch::logging::{LogFormat, LoggingConfig};
use nutrisearch::models::FoodSource;
use nutrisearch::search::FoodSearchService;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrisearch-cli",
    about = "Multi-source nutrition search",
    long_about = "Searches Nutritionix, USDA FoodData Central, and Open Food Facts \
                  concurrently, then deduplicates and ranks the answers."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging, on top of any `RUST_LOG` filter
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search foods by name
    Search {
        /// Free-text query
        query: String,

        /// Query a single source without ranking (nutritionix, usda, openfoodfacts)
        #[arg(long)]
        source: Option<FoodSource>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of results to print
        #[arg(long, short = 'n', default_value = "10")]
        limit: usize,
    },

    /// Look up a packaged food by barcode
    Barcode {
        /// UPC or EAN digits
        code: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search and group results that describe the same food
    Groups {
        /// Free-text query
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env_or(LogFormat::Compact);
    if cli.verbose {
        logging = logging.with_verbose();
    }
    logging.init()?;

    let config = EngineConfig::from_env()?;
    let service = FoodSearchService::from_config(&config);
    debug!(sources = ?service.sources(), "Search service ready");

    let outcome = match cli.command {
        Command::Search {
            query,
            source,
            json,
            limit,
        } => commands::search(&service, &query, source, json, limit).await,
        Command::Barcode { code, json } => commands::barcode(&service, &code, json).await,
        Command::Groups { query } => commands::groups(&service, &query).await,
    };

    service.shutdown();
    outcome
}
