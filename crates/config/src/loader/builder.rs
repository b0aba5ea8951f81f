//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Later layers win: whichever of `from_env()` and the `with_*` methods runs last
//!   overwrites the value set before it.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_FACTOR, DEFAULT_RETRY_MAX_SECS, DEFAULT_RETRY_MIN_SECS,
    DEFAULT_SERVICE_DOMAIN, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::{BackoffConfig, Config, ConnectionConfig, Credentials};

/// Configuration loader that builds config from environment variables and builder calls.
#[derive(Default)]
pub struct ConfigLoader {
    account: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    service_domain: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    retry_min: Option<Duration>,
    retry_max: Option<Duration>,
    retry_factor: Option<f64>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `LOGGLY_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_account(mut self, account: String) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Override the service domain (defaults to `loggly.com`).
    pub fn with_service_domain(mut self, domain: String) -> Self {
        self.service_domain = Some(domain);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries for 5xx responses.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the backoff policy in one go.
    pub fn with_backoff(mut self, backoff: BackoffConfig) -> Self {
        self.retry_min = Some(backoff.min);
        self.retry_max = Some(backoff.max);
        self.retry_factor = Some(backoff.factor);
        self
    }

    pub(crate) fn set_account(&mut self, account: Option<String>) {
        self.account = account;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<String>) {
        self.password = password.map(|p| SecretString::new(p.into()));
    }

    pub(crate) fn set_service_domain(&mut self, domain: Option<String>) {
        self.service_domain = domain;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_retry_min(&mut self, min: Option<Duration>) {
        self.retry_min = min;
    }

    pub(crate) fn set_retry_max(&mut self, max: Option<Duration>) {
        self.retry_max = max;
    }

    pub(crate) fn set_retry_factor(&mut self, factor: Option<f64>) {
        self.retry_factor = factor;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `MissingAccount` / `MissingAuth` when required values were never supplied.
    /// - `InvalidTimeout`, `InvalidMaxRetries`, `InvalidBackoff` for out-of-range values.
    pub fn build(self) -> Result<Config, ConfigError> {
        let account = self.account.ok_or(ConfigError::MissingAccount)?;

        let auth = match (self.username, self.password) {
            (Some(username), Some(password)) => Credentials { username, password },
            _ => return Err(ConfigError::MissingAuth),
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_TIMEOUT_SECS,
                    timeout.as_secs()
                ),
            });
        }

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, max_retries
                ),
            });
        }

        let backoff = BackoffConfig {
            min: self
                .retry_min
                .unwrap_or(Duration::from_secs(DEFAULT_RETRY_MIN_SECS)),
            max: self
                .retry_max
                .unwrap_or(Duration::from_secs(DEFAULT_RETRY_MAX_SECS)),
            factor: self.retry_factor.unwrap_or(DEFAULT_RETRY_FACTOR),
        };
        if backoff.min > backoff.max {
            return Err(ConfigError::InvalidBackoff {
                message: format!(
                    "minimum delay ({}s) exceeds maximum delay ({}s)",
                    backoff.min.as_secs(),
                    backoff.max.as_secs()
                ),
            });
        }
        if !backoff.factor.is_finite() || backoff.factor < 1.0 {
            return Err(ConfigError::InvalidBackoff {
                message: format!("factor must be at least 1.0 (got {})", backoff.factor),
            });
        }

        Ok(Config {
            account,
            auth,
            connection: ConnectionConfig {
                service_domain: self
                    .service_domain
                    .unwrap_or_else(|| DEFAULT_SERVICE_DOMAIN.to_string()),
                timeout,
                max_retries,
                backoff,
            },
        })
    }
}
