// ABOUTME: Logging configuration and structured logging setup for the search engine
// ABOUTME: Configures log level, output format, and noise reduction for HTTP client internals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging with `tracing`

use anyhow::Result;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const NOISY_TARGETS: &[&str] = &[
    "hyper=warn",
    "hyper_util=warn",
    "reqwest=warn",
    "rustls=warn",
    "h2=warn",
];

const VERBOSE_TARGETS: &[&str] = &[
    "nutrisearch",
    "nutrisearch_cli",
    "nutrisearch_core",
    "nutrisearch_sources",
];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Directives applied on top of `RUST_LOG` or `level`
    pub extra_directives: Vec<String>,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals and CLI use
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; unknown values yield `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: env!("CARGO_PKG_NAME").to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            extra_directives: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_or(LogFormat::Pretty)
    }

    /// Like [`Self::from_env`], with `default_format` used when `LOG_FORMAT`
    /// is unset or unrecognized
    #[must_use]
    pub fn from_env_or(default_format: LogFormat) -> Self {
        let format = env::var("LOG_FORMAT")
            .ok()
            .as_deref()
            .and_then(LogFormat::parse)
            .unwrap_or(default_format);

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_owned()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            extra_directives: Vec::new(),
        }
    }

    /// Raise this crate family to debug regardless of `RUST_LOG`
    #[must_use]
    pub fn with_verbose(mut self) -> Self {
        self.level = "debug".to_owned();
        self.extra_directives.extend(
            VERBOSE_TARGETS
                .iter()
                .map(|target| format!("{target}=debug")),
        );
        self
    }

    /// Build the filter: `rust_log` or the configured level, then noise
    /// reduction, then `extra_directives`
    fn build_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let base = EnvFilter::new(rust_log.unwrap_or(&self.level));

        NOISY_TARGETS
            .iter()
            .map(|directive| (*directive).to_owned())
            .chain(self.extra_directives.iter().cloned())
            .fold(base, |filter, directive| {
                filter.add_directive(
                    directive
                        .parse()
                        .unwrap_or_else(|_| Level::WARN.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber. Logs go to stderr so CLI
    /// output on stdout stays machine-readable.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let rust_log = env::var("RUST_LOG").ok();
        let registry =
            tracing_subscriber::registry().with(self.build_filter(rust_log.as_deref()));

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Nutrisearch starting up"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("compact"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse("xml"), None);
    }

    #[test]
    fn test_verbose_applies_over_rust_log() {
        let quiet = LoggingConfig::default();
        let filter = quiet.build_filter(Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let verbose = LoggingConfig::default().with_verbose();
        let filter = verbose.build_filter(Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
