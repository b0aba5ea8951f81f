//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `LOGGLY_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.
//! - `LOGGLY_USERNAME` wins over the legacy `LOGGLY_USER_NAME` spelling.

use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, value: &str, message: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(account) = env_var_or_none("LOGGLY_ACCOUNT") {
        loader.set_account(Some(account));
    }
    if let Some(username) =
        env_var_or_none("LOGGLY_USERNAME").or_else(|| env_var_or_none("LOGGLY_USER_NAME"))
    {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("LOGGLY_PASSWORD") {
        loader.set_password(Some(password));
    }
    if let Some(domain) = env_var_or_none("LOGGLY_DOMAIN") {
        loader.set_service_domain(Some(domain));
    }
    if let Some(timeout) = env_var_or_none("LOGGLY_TIMEOUT") {
        let secs: u64 = parse_env("LOGGLY_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("LOGGLY_MAX_RETRIES") {
        let value: usize = parse_env(
            "LOGGLY_MAX_RETRIES",
            &retries,
            "must be a non-negative integer",
        )?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    if let Some(min) = env_var_or_none("LOGGLY_RETRY_MIN_SECS") {
        let secs: u64 = parse_env("LOGGLY_RETRY_MIN_SECS", &min, "must be a number")?;
        loader.set_retry_min(Some(Duration::from_secs(secs)));
    }
    if let Some(max) = env_var_or_none("LOGGLY_RETRY_MAX_SECS") {
        let secs: u64 = parse_env("LOGGLY_RETRY_MAX_SECS", &max, "must be a number")?;
        loader.set_retry_max(Some(Duration::from_secs(secs)));
    }
    if let Some(factor) = env_var_or_none("LOGGLY_RETRY_FACTOR") {
        let factor: f64 = parse_env("LOGGLY_RETRY_FACTOR", &factor, "must be a number")?;
        loader.set_retry_factor(Some(factor));
    }
    Ok(())
}
