//! Configuration types for the Loggly retrieval client.

mod auth;
mod connection;

pub use auth::Credentials;
pub use connection::{BackoffConfig, Config, ConnectionConfig};
