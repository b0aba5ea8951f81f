//! REST API endpoint implementations.
//!
//! Each endpoint is a free function taking the client and its options; the
//! fluent handles in [`crate::client`] delegate here.

mod events;
mod query;
mod request;
mod search;

pub use events::{EventFormat, EventsOptions, get_events};
pub use query::QueryParams;
pub use search::{SearchOptions, SearchOrder, search};
