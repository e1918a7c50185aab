// ABOUTME: Structured error types for food source adapter operations
// ABOUTME: Classifies transport, status, payload, credential, and budget failures per source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::FoodSource;
use thiserror::Error;

/// Failure of a single outbound call to an external food database.
///
/// These never escape the adapter boundary during a normal search; they exist
/// so the adapter can log precisely what went wrong and so provider parsing can
/// be tested in isolation.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Connection, DNS, TLS, or body-read failure
    #[error("{provider} request failed: {message}")]
    Network {
        /// Source that failed
        provider: FoodSource,
        /// Transport error description
        message: String,
    },

    /// Provider answered with a non-success status
    #[error("{provider} returned HTTP {status}")]
    HttpStatus {
        /// Source that failed
        provider: FoodSource,
        /// HTTP status code
        status: u16,
    },

    /// Response body did not have the expected shape
    #[error("{provider} payload could not be parsed: {message}")]
    Parse {
        /// Source that failed
        provider: FoodSource,
        /// Parse error description
        message: String,
    },

    /// A credential-gated source has no credential configured
    #[error("{provider} is not configured ({variable} is unset)")]
    MissingCredentials {
        /// Source that is unconfigured
        provider: FoodSource,
        /// Environment variable that would enable it
        variable: &'static str,
    },

    /// The call did not complete within the per-call timeout
    #[error("{provider} timed out after {timeout_ms}ms")]
    Timeout {
        /// Source that timed out
        provider: FoodSource,
        /// Timeout that elapsed
        timeout_ms: u64,
    },

    /// The local per-source request budget is exhausted
    #[error("{provider} request budget exhausted, retry after {retry_after_secs}s")]
    RateLimited {
        /// Source whose budget is exhausted
        provider: FoodSource,
        /// Seconds until the oldest request leaves the window
        retry_after_secs: u64,
    },

    /// The source does not support the requested operation
    #[error("{provider} does not support {operation}")]
    Unsupported {
        /// Source asked to do something it cannot
        provider: FoodSource,
        /// Operation name
        operation: &'static str,
    },
}

impl SourceError {
    /// Source this error belongs to
    #[must_use]
    pub const fn provider(&self) -> FoodSource {
        match self {
            Self::Network { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::Parse { provider, .. }
            | Self::MissingCredentials { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::Unsupported { provider, .. } => *provider,
        }
    }

    /// Whether the same call could plausibly succeed later.
    ///
    /// The engine never retries on its own; this only feeds log fields so
    /// operators can tell a flaky provider from a misconfigured one.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::RateLimited { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Parse { .. } | Self::MissingCredentials { .. } | Self::Unsupported { .. } => {
                false
            }
        }
    }

    /// Create a parse error
    pub fn parse(provider: FoodSource, message: impl Into<String>) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(provider: FoodSource, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }
}

/// Result alias for adapter-internal fetches
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let server = SourceError::HttpStatus {
            provider: FoodSource::OpenFoodFacts,
            status: 503,
        };
        let not_found = SourceError::HttpStatus {
            provider: FoodSource::OpenFoodFacts,
            status: 404,
        };
        assert!(server.is_retryable());
        assert!(!not_found.is_retryable());
        assert!(!SourceError::parse(FoodSource::Usda, "missing foods").is_retryable());
        assert!(SourceError::network(FoodSource::Usda, "reset").is_retryable());
    }

    #[test]
    fn test_messages_name_the_source() {
        let error = SourceError::MissingCredentials {
            provider: FoodSource::Nutritionix,
            variable: "NUTRITIONIX_APP_ID",
        };
        assert_eq!(error.provider(), FoodSource::Nutritionix);
        assert_eq!(
            error.to_string(),
            "nutritionix is not configured (NUTRITIONIX_APP_ID is unset)"
        );
    }
}
