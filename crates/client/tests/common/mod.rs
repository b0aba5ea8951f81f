//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Loggly client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built against a mock server never wait more than a few milliseconds between retries
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use loggly_client::testing::{MockTransport, load_fixture, load_fixture_str};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use loggly_client::{ClientError, LogglyClient};
#[allow(unused_imports)]
pub use loggly_config::BackoffConfig;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `base64("alice:s3cret")` as sent in the Authorization header.
#[allow(dead_code)]
pub const ALICE_BASIC_AUTH: &str = "Basic YWxpY2U6czNjcmV0";

/// Backoff short enough for real-clock tests.
#[allow(dead_code)]
pub fn fast_backoff() -> BackoffConfig {
    BackoffConfig {
        min: Duration::from_millis(5),
        max: Duration::from_millis(20),
        factor: 1.5,
    }
}

/// A client pointed at the mock server with `max_retries` fast retries.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, max_retries: usize) -> LogglyClient {
    LogglyClient::builder()
        .base_url(server.uri())
        .credentials("alice", "s3cret")
        .max_retries(max_retries)
        .backoff(fast_backoff())
        .build()
        .expect("client should build")
}

/// A client over a scripted in-memory transport.
#[allow(dead_code)]
pub fn mock_client(transport: MockTransport) -> LogglyClient<MockTransport> {
    LogglyClient::builder()
        .account("acme")
        .credentials("alice", "s3cret")
        .build_with_transport(transport)
        .expect("client should build")
}
