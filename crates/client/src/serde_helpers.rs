//! Serde helpers for loosely typed Loggly JSON.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for fields the service renders both ways.
//!
//! Invariants / assumptions:
//! - Syslog priorities arrive as `"45"` or `45` depending on the source that shipped the event.
//! - These helpers must not log; errors are generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => Ok(v),
        U64OrString::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.parse::<u64>().map_err(D::Error::custom),
    }
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::U64(v) => Ok(v.to_string()),
        StringOrNumber::I64(v) => Ok(v.to_string()),
        StringOrNumber::F64(v) => Ok(v.to_string()),
    }
}
