//! Retry layer for server-side failures with capped exponential backoff.
//!
//! [`RetryTransport`] wraps another [`Transport`] and re-sends a request when
//! the inner transport answered with a 5xx status. Transport-level errors are
//! never retried here; they propagate immediately.
//!
//! Delays start at `min`, grow by `factor` after each attempt and never exceed
//! `max` (defaults 5s, 20s and 1.5).

use std::time::Duration;

use reqwest::Request;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::transport::{Transport, TransportResponse};
use loggly_config::BackoffConfig;
use loggly_config::constants::DEFAULT_MAX_RETRIES;

/// How long to wait between attempts and how many retries to make.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackoffPolicy {
    pub min: Duration,
    pub max: Duration,
    pub factor: f64,
    /// Retries after the first attempt; `0` turns the layer into a pass-through.
    pub max_retries: usize,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::from_config(&BackoffConfig::default(), DEFAULT_MAX_RETRIES)
    }
}

impl BackoffPolicy {
    pub fn from_config(backoff: &BackoffConfig, max_retries: usize) -> Self {
        Self {
            min: backoff.min,
            max: backoff.max,
            factor: backoff.factor,
            max_retries,
        }
    }

    /// Delay to use after `current`, capped at `max`.
    pub fn next_delay(&self, current: Duration) -> Duration {
        Duration::try_from_secs_f64(current.as_secs_f64() * self.factor)
            .unwrap_or(self.max)
            .min(self.max)
    }

    /// Delay before retry number `retry` (zero-based).
    pub fn delay_for(&self, retry: usize) -> Duration {
        let mut delay = self.min.min(self.max);
        for _ in 0..retry {
            delay = self.next_delay(delay);
        }
        delay
    }
}

/// Transport that retries 5xx responses from an inner transport.
#[derive(Debug, Clone)]
pub struct RetryTransport<T> {
    inner: T,
    policy: BackoffPolicy,
}

impl<T: Transport> RetryTransport<T> {
    pub fn new(inner: T, policy: BackoffPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &BackoffPolicy {
        &self.policy
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Transport> Transport for RetryTransport<T> {
    type Response = T::Response;

    async fn execute(&self, request: Request) -> Result<T::Response> {
        let max_retries = self.policy.max_retries;
        let mut delay = self.policy.min.min(self.policy.max);
        let mut attempt = 0;

        loop {
            let attempt_request = if attempt < max_retries {
                request.try_clone()
            } else {
                None
            };

            let Some(attempt_request) = attempt_request else {
                // Last allowed attempt, or a streaming body that cannot be re-sent.
                if attempt == 0 {
                    return self.inner.execute(request).await;
                }
                let response = self.inner.execute(request).await?;
                let status = response.status();
                if ClientError::is_retryable_status(status) {
                    warn!(
                        attempts = attempt + 1,
                        status, "Max retries exhausted for server error"
                    );
                    drop(response);
                    return Err(ClientError::MaxRetriesExceeded {
                        attempts: attempt + 1,
                        status,
                    });
                }
                debug!(attempt = attempt + 1, "Request succeeded after retry");
                return Ok(response);
            };

            let response = self.inner.execute(attempt_request).await?;
            let status = response.status();
            if !ClientError::is_retryable_status(status) {
                if attempt > 0 {
                    debug!(attempt = attempt + 1, "Request succeeded after retry");
                }
                return Ok(response);
            }

            drop(response);
            debug!(
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                status,
                delay_ms = delay.as_millis() as u64,
                "Server error, retrying with exponential backoff"
            );
            tokio::time::sleep(delay).await;
            delay = self.policy.next_delay(delay);
            attempt += 1;
        }
    }
}
