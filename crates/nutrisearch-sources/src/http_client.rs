// ABOUTME: Shared HTTP client with connection pooling for food database calls
// ABOUTME: Configured once at startup; helpers classify transport, status, and body failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::sources::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use crate::errors::{SourceError, SourceResult};
use crate::models::FoodSource;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;

/// Configured timeout values for the shared client
static CLIENT_TIMEOUTS: OnceLock<(Duration, Duration)> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Must be called once at startup before any adapter asks for the client.
/// If not called, the documented defaults are used (3s request, 2s connect).
pub fn initialize_shared_client(timeout: Duration, connect_timeout: Duration) {
    let _ = CLIENT_TIMEOUTS.set((timeout, connect_timeout));
}

/// Get the shared HTTP client for food database calls
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = CLIENT_TIMEOUTS.get().copied().unwrap_or((
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        ));

        ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Send a request, mapping transport failures to `SourceError`
pub(crate) async fn send(provider: FoodSource, request: RequestBuilder) -> SourceResult<Response> {
    request
        .send()
        .await
        .map_err(|e| classify_transport_error(provider, &e))
}

/// Require a success status and decode the body as JSON
pub(crate) async fn read_json(provider: FoodSource, response: Response) -> SourceResult<Value> {
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::HttpStatus {
            provider,
            status: status.as_u16(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| SourceError::parse(provider, format!("JSON parse error: {e}")))
}

fn classify_transport_error(provider: FoodSource, error: &reqwest::Error) -> SourceError {
    if error.is_timeout() {
        let timeout_ms = CLIENT_TIMEOUTS
            .get()
            .map_or(DEFAULT_REQUEST_TIMEOUT_SECS * 1000, |(timeout, _)| {
                timeout.as_millis() as u64
            });
        return SourceError::Timeout {
            provider,
            timeout_ms,
        };
    }
    SourceError::network(provider, error.to_string())
}
