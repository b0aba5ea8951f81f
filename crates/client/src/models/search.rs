//! Search (result-set descriptor) models.

use serde::{Deserialize, Serialize};

/// Body of a successful `GET /apiv2/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub rsid: ResultSet,
}

impl SearchResponse {
    /// The result-set identifier to hand to the events endpoint.
    pub fn rsid(&self) -> &str {
        &self.rsid.id
    }
}

/// Descriptor of the result set a search produced.
///
/// The service owns its lifetime; an RSID may expire between the search and
/// the events call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Server-side state of the search, e.g. `SCHEDULED`.
    #[serde(default)]
    pub status: String,
    /// Start of the covered window, milliseconds since the epoch.
    #[serde(default)]
    pub date_from: i64,
    /// Seconds the service spent on the search.
    #[serde(default)]
    pub elapsed_time: f64,
    /// End of the covered window, milliseconds since the epoch.
    #[serde(default)]
    pub date_to: i64,
    /// Opaque result-set identifier (RSID).
    pub id: String,
}
