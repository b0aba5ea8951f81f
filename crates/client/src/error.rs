//! Error types for the Loggly retrieval client.

use bytes::Bytes;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Non-200 answer from `/apiv2/search`.
///
/// The body is kept verbatim; the service does not promise an error schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid response (code: {status}, body: {})", String::from_utf8_lossy(.body))]
pub struct SearchError {
    pub status: u16,
    pub body: Bytes,
}

/// Non-200 answer from `/apiv2/events`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid response (code: {status}, body: {})", String::from_utf8_lossy(.body))]
pub struct EventsError {
    pub status: u16,
    pub body: Bytes,
}

/// A string that does not name a known search order or event format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Errors that can occur during Loggly client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or protocol failure reported by the HTTP stack.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The retry transport kept getting 5xx answers until it ran out of attempts.
    #[error("Maximum retries exceeded ({attempts} attempts, last status {status})")]
    MaxRetriesExceeded { attempts: usize, status: u16 },

    /// Invalid account, domain or base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Credentials could not be turned into an `Authorization` header.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Search API error: {0}")]
    Search(#[from] SearchError),

    #[error("Events API error: {0}")]
    Events(#[from] EventsError),

    /// A 200 response whose body did not match the expected JSON shape.
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// HTTP status attached to this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Search(e) => Some(e.status),
            Self::Events(e) => Some(e.status),
            Self::MaxRetriesExceeded { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body for endpoint errors.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Search(e) => Some(&e.body),
            Self::Events(e) => Some(&e.body),
            _ => None,
        }
    }

    /// True for failures below the HTTP status layer (network, exhausted retries).
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::MaxRetriesExceeded { .. })
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if an HTTP status code should be retried by the retry transport.
    ///
    /// Every 5xx status is retryable; nothing else is.
    pub fn is_retryable_status(status: u16) -> bool {
        (500..600).contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display_includes_body() {
        let err = SearchError {
            status: 503,
            body: Bytes::from_static(b"upstream down"),
        };
        assert_eq!(
            err.to_string(),
            "invalid response (code: 503, body: upstream down)"
        );
    }

    #[test]
    fn test_events_error_display_is_lossy_utf8() {
        let err = EventsError {
            status: 503,
            body: Bytes::from_static(b"busy \xff"),
        };
        assert_eq!(
            err.to_string(),
            "invalid response (code: 503, body: busy \u{fffd})"
        );
        assert_eq!(
            ClientError::from(err).to_string(),
            "Events API error: invalid response (code: 503, body: busy \u{fffd})"
        );
    }

    #[test]
    fn test_status_code_and_body_accessors() {
        let err = ClientError::from(EventsError {
            status: 404,
            body: Bytes::from_static(b"{\"error\":\"rsid expired\"}"),
        });
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.body(), Some(&b"{\"error\":\"rsid expired\"}"[..]));
        assert!(!err.is_transport_error());
    }

    #[test]
    fn test_max_retries_is_transport_error() {
        let err = ClientError::MaxRetriesExceeded {
            attempts: 4,
            status: 503,
        };
        assert!(err.is_transport_error());
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.body(), None);
    }

    #[test]
    fn test_decode_error() {
        let source = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err = ClientError::Decode {
            endpoint: "search",
            source,
        };
        assert!(err.is_decode_error());
        assert!(err.to_string().starts_with("Failed to decode search response"));
    }

    #[test]
    fn test_is_retryable_status() {
        assert!(ClientError::is_retryable_status(500));
        assert!(ClientError::is_retryable_status(503));
        assert!(ClientError::is_retryable_status(599));

        assert!(!ClientError::is_retryable_status(200));
        assert!(!ClientError::is_retryable_status(404));
        assert!(!ClientError::is_retryable_status(429));
        assert!(!ClientError::is_retryable_status(600));
    }
}
