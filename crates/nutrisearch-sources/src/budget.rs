// ABOUTME: Sliding-window request budget that keeps a source under its published rate limit
// ABOUTME: Never waits; an exhausted budget is reported so the adapter can skip the call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Requests allowed per sliding window.
///
/// Interactive search cannot afford to queue behind a provider's quota, so
/// unlike a blocking limiter this only answers "may I call now?".
#[derive(Debug)]
pub struct RequestBudget {
    limit: usize,
    window: Duration,
    requests: Mutex<VecDeque<Instant>>,
}

impl RequestBudget {
    /// Budget of `limit` requests per `window`
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit: limit as usize,
            window,
            requests: Mutex::new(VecDeque::with_capacity(limit as usize)),
        }
    }

    /// Budget of `limit` requests per minute
    #[must_use]
    pub fn per_minute(limit: u32) -> Self {
        Self::new(limit, Duration::from_secs(60))
    }

    /// Record a request if the budget allows one.
    ///
    /// # Errors
    ///
    /// Returns the time until the oldest request leaves the window when the
    /// budget is exhausted.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        let now = Instant::now();
        let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);

        while requests
            .front()
            .is_some_and(|&t| now.duration_since(t) >= self.window)
        {
            requests.pop_front();
        }

        if requests.len() < self.limit {
            requests.push_back(now);
            return Ok(());
        }

        let oldest = requests.front().copied().unwrap_or(now);
        Err(self.window.saturating_sub(now.duration_since(oldest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_budget_exhausts_and_recovers() {
        let budget = RequestBudget::per_minute(2);
        assert!(budget.try_acquire().is_ok());
        assert!(budget.try_acquire().is_ok());

        let retry_after = budget.try_acquire().unwrap_err();
        assert_eq!(retry_after, Duration::from_secs(60));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(budget.try_acquire().is_ok());
        assert!(budget.try_acquire().is_ok());
        assert!(budget.try_acquire().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_limit_always_rejects() {
        let budget = RequestBudget::per_minute(0);
        assert!(budget.try_acquire().is_err());
    }
}
