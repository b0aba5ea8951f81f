//! Search endpoint (`GET /apiv2/search`).

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::LogglyClient;
use crate::endpoints::QueryParams;
use crate::endpoints::request::{STATUS_OK, decode_json, read_response};
use crate::error::{ParseOptionError, Result, SearchError};
use crate::models::SearchResponse;
use crate::transport::Transport;
use loggly_config::constants::{DEFAULT_SEARCH_FROM, DEFAULT_SEARCH_UNTIL};

const SEARCH_PATH: &str = "/apiv2/search";

/// Sort order of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    Asc,
    #[default]
    Desc,
}

impl SearchOrder {
    /// Every order, in wire-name order.
    pub fn all() -> [SearchOrder; 2] {
        [SearchOrder::Asc, SearchOrder::Desc]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Asc => "asc",
            SearchOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchOrder {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SearchOrder::Asc),
            "desc" => Ok(SearchOrder::Desc),
            other => Err(ParseOptionError {
                kind: "search order",
                value: other.to_string(),
                expected: "asc, desc",
            }),
        }
    }
}

/// Time window and ordering for a search.
///
/// Values are immutable: every setter borrows `self` and returns a new
/// `SearchOptions`, so a base configuration can be reused freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    from: String,
    until: String,
    order: SearchOrder,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            from: DEFAULT_SEARCH_FROM.to_string(),
            until: DEFAULT_SEARCH_UNTIL.to_string(),
            order: SearchOrder::Desc,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of the window, e.g. `-2h` or an ISO-8601 timestamp.
    pub fn from(&self, from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..self.clone()
        }
    }

    /// End of the window, e.g. `now`.
    pub fn until(&self, until: impl Into<String>) -> Self {
        Self {
            until: until.into(),
            ..self.clone()
        }
    }

    pub fn order(&self, order: SearchOrder) -> Self {
        Self {
            order,
            ..self.clone()
        }
    }

    pub fn time_from(&self) -> &str {
        &self.from
    }

    pub fn time_until(&self) -> &str {
        &self.until
    }

    pub fn sort_order(&self) -> SearchOrder {
        self.order
    }

    /// Query parameters contributed by these options (`from`, `until`, `order`).
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("from", self.from.as_str())
            .with("until", self.until.as_str())
            .with("order", self.order.as_str())
    }
}

/// Run a search and return the result-set descriptor.
///
/// # Errors
///
/// - `ClientError::Search` for any status other than 200, with the raw body.
/// - `ClientError::Decode` when a 200 body is not a valid search response.
/// - Transport errors unchanged.
pub async fn search<T: Transport>(
    client: &LogglyClient<T>,
    size: usize,
    query: &str,
    options: &SearchOptions,
) -> Result<SearchResponse> {
    debug!("Running search: {} (size={})", query, size);

    let params = options
        .to_query()
        .with("q", query)
        .with("size", size.to_string());

    let response = client
        .call(Method::GET, SEARCH_PATH, Some(&params), None)
        .await?;
    let (status, body) = read_response(response).await?;

    if status != STATUS_OK {
        return Err(SearchError { status, body }.into());
    }

    decode_json("search", &body)
}
