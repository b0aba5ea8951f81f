//! Pluggable HTTP execution for the retrieval client.
//!
//! The endpoints only need "send this request, give me a status and a body".
//! That capability is the [`Transport`] trait; [`ReqwestTransport`] does the
//! actual network I/O and [`RetryTransport`] layers 5xx backoff on top of any
//! other transport.
//!
//! # Invariants
//! - A [`TransportResponse`] is released exactly once: either by
//!   [`TransportResponse::into_body`], which consumes it, or by being dropped.
//! - Transports never interpret status codes beyond what their own policy needs;
//!   classification belongs to the endpoints.

mod http;
mod retry;

use bytes::Bytes;
use reqwest::Request;

use crate::error::Result;

pub use http::ReqwestTransport;
pub use retry::{BackoffPolicy, RetryTransport};

/// Transport used by [`crate::LogglyClient::new`].
pub type DefaultTransport = RetryTransport<ReqwestTransport>;

/// A response handed back by a [`Transport`].
pub trait TransportResponse: Send {
    /// HTTP status code.
    fn status(&self) -> u16;

    /// Read the whole body, consuming (and thereby releasing) the response.
    fn into_body(self) -> impl Future<Output = Result<Bytes>> + Send;
}

/// Executes fully-formed requests.
pub trait Transport: Send + Sync {
    type Response: TransportResponse;

    fn execute(&self, request: Request) -> impl Future<Output = Result<Self::Response>> + Send;
}

impl TransportResponse for reqwest::Response {
    fn status(&self) -> u16 {
        reqwest::Response::status(self).as_u16()
    }

    async fn into_body(self) -> Result<Bytes> {
        Ok(self.bytes().await?)
    }
}
