//! Connection configuration types for the Loggly retrieval client.
//!
//! Responsibilities:
//! - Define connection settings (service domain, timeout, retries, backoff).
//! - Define the main `Config` structure combining account, credentials and connection.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_FACTOR, DEFAULT_RETRY_MAX_SECS, DEFAULT_RETRY_MIN_SECS,
    DEFAULT_SERVICE_DOMAIN, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::Credentials;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Capped exponential backoff applied to 5xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Delay before the first retry.
    #[serde(with = "duration_seconds")]
    pub min: Duration,
    /// Upper bound on any single delay.
    #[serde(with = "duration_seconds")]
    pub max: Duration,
    /// Multiplier applied to the delay after every attempt.
    pub factor: f64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            min: Duration::from_secs(DEFAULT_RETRY_MIN_SECS),
            max: Duration::from_secs(DEFAULT_RETRY_MAX_SECS),
            factor: DEFAULT_RETRY_FACTOR,
        }
    }
}

/// Connection configuration for the retrieval API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Domain appended to the account name to form the host.
    #[serde(default = "default_service_domain")]
    pub service_domain: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for 5xx responses; 0 disables retrying.
    pub max_retries: usize,
    #[serde(default)]
    pub backoff: BackoffConfig,
}

pub(crate) fn default_service_domain() -> String {
    DEFAULT_SERVICE_DOMAIN.to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            service_domain: default_service_domain(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: BackoffConfig::default(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Loggly account (subdomain) name.
    pub account: String,
    /// Basic Auth credentials.
    pub auth: Credentials,
    /// Connection settings
    #[serde(default)]
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a config for an account with default connection settings.
    pub fn new(account: impl Into<String>, auth: Credentials) -> Self {
        Self {
            account: account.into(),
            auth,
            connection: ConnectionConfig::default(),
        }
    }

    /// Host name the client talks to, e.g. `acme.loggly.com`.
    pub fn host(&self) -> String {
        format!("{}.{}", self.account, self.connection.service_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_connection_config() {
        let conn = ConnectionConfig::default();
        assert_eq!(conn.service_domain, "loggly.com");
        assert_eq!(conn.timeout, Duration::from_secs(30));
        assert_eq!(conn.max_retries, 3);
        assert_eq!(conn.backoff.min, Duration::from_secs(5));
        assert_eq!(conn.backoff.max, Duration::from_secs(20));
        assert_eq!(conn.backoff.factor, 1.5);
    }

    #[test]
    fn test_host_uses_account_and_domain() {
        let config = Config::new("acme", Credentials::new("u", "p"));
        assert_eq!(config.host(), "acme.loggly.com");
    }

    #[test]
    fn test_durations_serialize_as_seconds() {
        let conn = ConnectionConfig::default();
        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(json["timeout"], 30);
        assert_eq!(json["backoff"]["min"], 5);
        assert_eq!(json["backoff"]["max"], 20);
    }

    #[test]
    fn test_connection_defaults_when_missing() {
        let json = r#"{"account":"acme","auth":{"username":"u","password":"p"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.connection.service_domain, "loggly.com");
        assert_eq!(config.connection.max_retries, 3);
    }
}
