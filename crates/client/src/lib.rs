//! Loggly retrieval API client.
//!
//! This crate provides a type-safe async client for Loggly's `/apiv2`
//! retrieval endpoints: a search that returns a result-set id (RSID), and an
//! events fetch that pages through that result set. Requests use HTTP Basic
//! Auth against `<account>.loggly.com` and go through a pluggable
//! [`Transport`], by default one that retries 5xx answers with capped
//! exponential backoff.

mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod transport;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::builder::LogglyClientBuilder;
pub use client::{Events, LogglyClient, Search};
pub use endpoints::{EventFormat, EventsOptions, QueryParams, SearchOptions, SearchOrder};
pub use error::{ClientError, EventsError, ParseOptionError, Result, SearchError};
pub use models::{Event, EventPayload, EventsResponse, ResultSet, SearchResponse, Syslog};
pub use transport::{
    BackoffPolicy, DefaultTransport, ReqwestTransport, RetryTransport, Transport,
    TransportResponse,
};
