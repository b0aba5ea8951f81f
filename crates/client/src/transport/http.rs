//! Plain `reqwest` transport.

use std::time::Duration;

use reqwest::Request;
use tracing::debug;

use crate::error::Result;
use crate::transport::Transport;
use loggly_config::constants::DEFAULT_MAX_REDIRECTS;

/// Sends each request once through a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::from_client(reqwest::Client::new())
    }
}

impl Transport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn execute(&self, request: Request) -> Result<reqwest::Response> {
        debug!(method = %request.method(), path = request.url().path(), "Sending request");
        let response = self.http.execute(request).await?;
        debug!(status = response.status().as_u16(), "Received response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loggly_config::constants::DEFAULT_TIMEOUT_SECS;

    #[test]
    fn test_new_with_timeout() {
        assert!(ReqwestTransport::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).is_ok());
    }
}
