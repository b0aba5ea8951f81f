//! Data models for Loggly retrieval API responses.
//!
//! # Submodules
//! - [`search`]: result-set descriptor returned by `/apiv2/search`
//! - [`events`]: event pages returned by `/apiv2/events`

pub mod events;
pub mod search;

pub use events::{Event, EventPayload, EventsResponse, Syslog};
pub use search::{ResultSet, SearchResponse};
