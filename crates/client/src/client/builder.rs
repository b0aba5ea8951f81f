//! Client builder for constructing [`LogglyClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the account name before it becomes part of a host
//! - Precomputing the HTTP Basic Auth header
//! - Assembling the default retrying transport
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`LogglyClient`] methods in `mod.rs`)
//! - Retry decisions (handled by [`RetryTransport`])
//!
//! # Invariants
//! - `account` and `credentials` are required before calling `build()`
//! - The base URL never carries a path, query or trailing slash

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Url;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::client::LogglyClient;
use crate::error::{ClientError, Result};
use crate::transport::{
    BackoffPolicy, DefaultTransport, ReqwestTransport, RetryTransport, Transport,
};
use loggly_config::{
    BackoffConfig, Config, Credentials,
    constants::{
        DEFAULT_MAX_RETRIES, DEFAULT_SCHEME, DEFAULT_SERVICE_DOMAIN, DEFAULT_TIMEOUT_SECS,
    },
};

/// Builder for creating a new [`LogglyClient`].
///
/// # Example
///
/// ```rust,ignore
/// use loggly_client::LogglyClient;
///
/// let client = LogglyClient::builder()
///     .account("acme")
///     .credentials("alice", "s3cret")
///     .max_retries(5)
///     .build()?;
/// ```
pub struct LogglyClientBuilder {
    account: Option<String>,
    credentials: Option<Credentials>,
    service_domain: String,
    base_url: Option<String>,
    timeout: Duration,
    max_retries: usize,
    backoff: BackoffConfig,
}

impl Default for LogglyClientBuilder {
    fn default() -> Self {
        Self {
            account: None,
            credentials: None,
            service_domain: DEFAULT_SERVICE_DOMAIN.to_string(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: BackoffConfig::default(),
        }
    }
}

impl LogglyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the account; requests go to `<account>.<service_domain>`.
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set the Basic Auth credentials.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Domain the account host lives under. Default is `loggly.com`.
    pub fn service_domain(mut self, domain: impl Into<String>) -> Self {
        self.service_domain = domain.into();
        self
    }

    /// Send requests to this origin instead of the account host.
    ///
    /// Any path or query on `url` is dropped. When set, `account` becomes optional.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries on 5xx responses.
    ///
    /// Default is 3. Zero disables retrying.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn backoff(mut self, backoff: BackoffConfig) -> Self {
        self.backoff = backoff;
        self
    }

    /// Create a client builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.account = Some(config.account.clone());
        self.credentials = Some(config.auth.clone());
        self.service_domain = config.connection.service_domain.clone();
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self.backoff = config.connection.backoff;
        self
    }

    /// Build the [`LogglyClient`] with the default retrying transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the account is missing or not a valid host label.
    /// Returns [`ClientError::AuthFailed`] if credentials were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<LogglyClient<DefaultTransport>> {
        let inner = ReqwestTransport::new(self.timeout)?;
        let policy = BackoffPolicy::from_config(&self.backoff, self.max_retries);
        self.build_with_transport(RetryTransport::new(inner, policy))
    }

    /// Build the [`LogglyClient`] on top of a caller-supplied transport.
    ///
    /// `timeout`, `max_retries` and `backoff` are ignored; the transport owns them.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<LogglyClient<T>> {
        let base_url = self.resolve_base_url()?;
        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;
        let auth_header = basic_auth_header(&credentials.username, &credentials.password)?;

        Ok(LogglyClient {
            transport,
            base_url,
            credentials,
            auth_header,
        })
    }

    fn resolve_base_url(&self) -> Result<Url> {
        let raw = match (&self.base_url, &self.account) {
            (Some(url), _) => url.clone(),
            (None, Some(account)) => {
                validate_account(account)?;
                format!("{DEFAULT_SCHEME}://{account}.{}", self.service_domain)
            }
            (None, None) => {
                return Err(ClientError::InvalidUrl("account is required".to_string()));
            }
        };

        let mut url =
            Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ClientError::InvalidUrl(format!("{raw}: not an origin")));
        }
        url.set_path("");
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

/// An account must be a single DNS label: 1-63 ASCII alphanumerics or
/// hyphens, not starting or ending with a hyphen.
fn validate_account(account: &str) -> Result<()> {
    let valid = !account.is_empty()
        && account.len() <= 63
        && !account.starts_with('-')
        && !account.ends_with('-')
        && account
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-');

    if valid {
        Ok(())
    } else {
        Err(ClientError::InvalidUrl(format!(
            "invalid account name: {account:?}"
        )))
    }
}

fn basic_auth_header(username: &str, password: &SecretString) -> Result<HeaderValue> {
    let encoded = STANDARD.encode(format!("{username}:{}", password.expose_secret()));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|e| ClientError::AuthFailed(format!("invalid authorization header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;

    #[test]
    fn test_build_requires_account() {
        let err = LogglyClientBuilder::new()
            .credentials("alice", "s3cret")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_requires_credentials() {
        let err = LogglyClientBuilder::new().account("acme").build().unwrap_err();
        assert!(matches!(err, ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_account_must_be_host_label() {
        for bad in ["", "acme.evil.com", "acme/path", "-acme", "acme-", "ac me", "ac?me"] {
            let result = LogglyClientBuilder::new()
                .account(bad)
                .credentials("alice", "s3cret")
                .build_with_transport(MockTransport::new());
            assert!(
                matches!(result, Err(ClientError::InvalidUrl(_))),
                "account {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_account_with_hyphen_and_digits() {
        let client = LogglyClientBuilder::new()
            .account("acme-01")
            .credentials("alice", "s3cret")
            .build_with_transport(MockTransport::new())
            .unwrap();
        assert_eq!(client.base_url(), "http://acme-01.loggly.com");
    }

    #[test]
    fn test_service_domain_override() {
        let client = LogglyClientBuilder::new()
            .account("acme")
            .service_domain("loggly.example.net")
            .credentials("alice", "s3cret")
            .build_with_transport(MockTransport::new())
            .unwrap();
        assert_eq!(client.base_url(), "http://acme.loggly.example.net");
    }

    #[test]
    fn test_base_url_override_drops_path() {
        let client = LogglyClientBuilder::new()
            .base_url("http://127.0.0.1:8080/some/prefix?x=1")
            .credentials("alice", "s3cret")
            .build_with_transport(MockTransport::new())
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_override_rejects_garbage() {
        let result = LogglyClientBuilder::new()
            .base_url("not a url")
            .credentials("alice", "s3cret")
            .build_with_transport(MockTransport::new());
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_auth_header_is_sensitive() {
        let header =
            basic_auth_header("alice", &SecretString::from("s3cret".to_string())).unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "Basic YWxpY2U6czNjcmV0");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::new("acme", Credentials::new("alice", "s3cret"));
        config.connection.service_domain = "loggly.example.net".to_string();
        config.connection.timeout = Duration::from_secs(90);
        config.connection.max_retries = 7;
        config.connection.backoff = BackoffConfig {
            min: Duration::from_secs(1),
            max: Duration::from_secs(4),
            factor: 2.0,
        };

        let builder = LogglyClientBuilder::new().from_config(&config);

        assert_eq!(builder.account.as_deref(), Some("acme"));
        assert_eq!(builder.service_domain, "loggly.example.net");
        assert_eq!(builder.timeout, Duration::from_secs(90));
        assert_eq!(builder.max_retries, 7);
        assert_eq!(builder.backoff.factor, 2.0);

        let client = builder.build().unwrap();
        assert_eq!(client.base_url(), "http://acme.loggly.example.net");
        assert_eq!(client.transport().policy().max_retries, 7);
        assert_eq!(client.transport().policy().min, Duration::from_secs(1));
    }
}
