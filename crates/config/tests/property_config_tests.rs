//! Property-based tests for configuration serialization and validation.
//!
//! Test coverage:
//! - Config: roundtrip serialization with all fields (durations in whole seconds)
//! - ConfigLoader: any in-range timeout and retry count builds
//! - ConfigLoader: backoff with `min > max` never builds

use proptest::prelude::*;
use secrecy::ExposeSecret;

use loggly_config::{BackoffConfig, Config, ConfigError, ConfigLoader, Credentials};
use std::time::Duration;

/// Strategy for generating valid account names (single DNS labels).
fn account_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}[a-z0-9]"
}

fn loader(account: &str) -> ConfigLoader {
    ConfigLoader::new()
        .with_account(account.to_string())
        .with_username("alice".to_string())
        .with_password("s3cret".to_string())
}

proptest! {
    #[test]
    fn test_config_roundtrip(
        account in account_strategy(),
        username in "[a-z]{1,12}",
        password in "[!-~]{1,24}",
        timeout_secs in 1u64..=3600,
        max_retries in 0usize..=10,
        min_secs in 0u64..30,
        extra_secs in 0u64..60,
    ) {
        let mut config = Config::new(account.clone(), Credentials::new(username.clone(), password.clone()));
        config.connection.timeout = Duration::from_secs(timeout_secs);
        config.connection.max_retries = max_retries;
        config.connection.backoff = BackoffConfig {
            min: Duration::from_secs(min_secs),
            max: Duration::from_secs(min_secs + extra_secs),
            factor: 2.0,
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(back.account, account);
        prop_assert_eq!(back.auth.username, username);
        prop_assert_eq!(back.auth.password.expose_secret(), password.as_str());
        prop_assert_eq!(back.connection.timeout, config.connection.timeout);
        prop_assert_eq!(back.connection.max_retries, max_retries);
        prop_assert_eq!(back.connection.backoff, config.connection.backoff);
    }

    #[test]
    fn test_in_range_settings_build(
        account in account_strategy(),
        timeout_secs in 1u64..=3600,
        max_retries in 0usize..=10,
    ) {
        let config = loader(&account)
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_max_retries(max_retries)
            .build()
            .unwrap();

        prop_assert_eq!(config.connection.timeout, Duration::from_secs(timeout_secs));
        prop_assert_eq!(config.connection.max_retries, max_retries);
        prop_assert_eq!(config.host(), format!("{account}.loggly.com"));
    }

    #[test]
    fn test_inverted_backoff_rejected(
        max_secs in 0u64..100,
        gap in 1u64..100,
    ) {
        let result = loader("acme")
            .with_backoff(BackoffConfig {
                min: Duration::from_secs(max_secs + gap),
                max: Duration::from_secs(max_secs),
                factor: 1.5,
            })
            .build();

        prop_assert!(matches!(result, Err(ConfigError::InvalidBackoff { .. })), "expected InvalidBackoff");
    }
}
