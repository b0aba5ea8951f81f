//! Credential types for Loggly configuration.
//!
//! Responsibilities:
//! - Hold the username/password pair sent as HTTP Basic Auth.
//! - Handle serialization of the secret password.
//!
//! Does NOT handle:
//! - Building the `Authorization` header (see client crate).
//! - Credential provisioning or rotation.
//!
//! Invariants:
//! - The password is always a `secrecy::SecretString` so it never shows up in `Debug` output.
//! - Serialization includes the secret; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Username and password for HTTP Basic Auth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}
