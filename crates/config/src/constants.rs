//! Centralized constants for the Loggly retrieval workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Service & Connection Defaults
// =============================================================================

/// Domain under which every Loggly account has its own host (`<account>.loggly.com`).
pub const DEFAULT_SERVICE_DOMAIN: &str = "loggly.com";

/// Scheme used to reach the retrieval API.
pub const DEFAULT_SCHEME: &str = "http";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Retry / Backoff Defaults
// =============================================================================

/// Default maximum number of retries for 5xx responses.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for configured retries.
pub const MAX_MAX_RETRIES: usize = 10;

/// Delay before the first retry, in seconds.
pub const DEFAULT_RETRY_MIN_SECS: u64 = 5;

/// Cap on the delay between two retries, in seconds.
pub const DEFAULT_RETRY_MAX_SECS: u64 = 20;

/// Growth factor applied to the delay after each retry.
pub const DEFAULT_RETRY_FACTOR: f64 = 1.5;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Search & Events Defaults
// =============================================================================

/// Default start of the search window.
pub const DEFAULT_SEARCH_FROM: &str = "-24h";

/// Default end of the search window.
pub const DEFAULT_SEARCH_UNTIL: &str = "now";

/// Default events page (pages are zero-indexed).
pub const DEFAULT_EVENTS_PAGE: u32 = 0;
