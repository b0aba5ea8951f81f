//! Response handling shared by the retrieval endpoints.
//!
//! Both endpoints follow the same shape: read the body (which releases the
//! response), map anything but 200 to an endpoint error carrying the raw bytes,
//! and decode 200 bodies as JSON.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::transport::TransportResponse;

/// Status code the retrieval API uses for success.
pub(crate) const STATUS_OK: u16 = 200;

/// Consume a response, returning its status and full body.
///
/// The response is moved in, so it is released here whatever happens next.
pub(crate) async fn read_response<R: TransportResponse>(response: R) -> Result<(u16, Bytes)> {
    let status = response.status();
    let body = response.into_body().await?;
    debug!(status, body_len = body.len(), "Read response body");
    Ok((status, body))
}

/// Decode a successful body, tagging failures with the endpoint name.
pub(crate) fn decode_json<D: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<D> {
    serde_json::from_slice(body).map_err(|source| ClientError::Decode { endpoint, source })
}
