//! Event page models returned by `/apiv2/events`.
//!
//! The fixed syslog header is typed; the parsed JSON body of each event is
//! whatever the sender logged, so it stays a `serde_json` map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of events for a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub total_events: u64,
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl EventsResponse {
    /// True when pages after this one may still hold events.
    pub fn has_more(&self, page_size: usize) -> bool {
        let seen = (self.page as u64 + 1).saturating_mul(page_size as u64);
        seen < self.total_events
    }
}

/// A single log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub tags: Vec<String>,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub timestamp: i64,
    /// Raw message as received.
    #[serde(rename = "logmsg", default)]
    pub log_message: String,
    #[serde(default)]
    pub event: EventPayload,
    #[serde(rename = "logtypes", default)]
    pub log_types: Vec<String>,
    pub id: String,
}

impl Event {
    /// Event time as a UTC datetime, if the millisecond timestamp is in range.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Look up a top-level field of the parsed JSON payload.
    pub fn json_field(&self, key: &str) -> Option<&Value> {
        self.event.json.as_ref().and_then(|json| json.get(key))
    }
}

/// Structured payload Loggly extracted from the message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog: Option<Syslog>,
    /// Arbitrary parsed JSON body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<Map<String, Value>>,
    /// Any other parser output (`http`, `apache`, ...).
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Syslog header fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Syslog {
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::string_from_number_or_string"
    )]
    pub priority: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub facility: String,
}
