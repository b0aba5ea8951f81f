//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every `LOGGLY_*` variable the loader reads, cleared so host env cannot leak in.
pub const LOGGLY_VARS: [&str; 10] = [
    "LOGGLY_ACCOUNT",
    "LOGGLY_USERNAME",
    "LOGGLY_USER_NAME",
    "LOGGLY_PASSWORD",
    "LOGGLY_DOMAIN",
    "LOGGLY_TIMEOUT",
    "LOGGLY_MAX_RETRIES",
    "LOGGLY_RETRY_MIN_SECS",
    "LOGGLY_RETRY_MAX_SECS",
    "LOGGLY_RETRY_FACTOR",
];

/// Run `f` with all loader variables unset except the given overrides.
pub fn with_loggly_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let vars: Vec<(&str, Option<&str>)> = LOGGLY_VARS
        .iter()
        .map(|key| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| *v);
            (*key, value)
        })
        .collect();
    temp_env::with_vars(vars, f);
}
