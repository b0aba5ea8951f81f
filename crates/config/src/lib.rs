//! Configuration management for the Loggly retrieval client.
//!
//! This crate provides types and loaders for the account, credentials and
//! connection settings, sourced from environment variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{BackoffConfig, Config, ConnectionConfig, Credentials};
