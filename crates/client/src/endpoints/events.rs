//! Events endpoint (`GET /apiv2/events`).

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::LogglyClient;
use crate::endpoints::QueryParams;
use crate::endpoints::request::{STATUS_OK, decode_json, read_response};
use crate::error::{EventsError, ParseOptionError, Result};
use crate::models::EventsResponse;
use crate::transport::Transport;
use loggly_config::constants::DEFAULT_EVENTS_PAGE;

const EVENTS_PATH: &str = "/apiv2/events";

/// Output format requested from the events endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventFormat {
    Raw,
    Csv,
    #[default]
    Json,
}

impl EventFormat {
    pub fn all() -> [EventFormat; 3] {
        [EventFormat::Raw, EventFormat::Csv, EventFormat::Json]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventFormat::Raw => "raw",
            EventFormat::Csv => "csv",
            EventFormat::Json => "json",
        }
    }
}

impl fmt::Display for EventFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "raw" => Ok(EventFormat::Raw),
            "csv" => Ok(EventFormat::Csv),
            "json" => Ok(EventFormat::Json),
            other => Err(ParseOptionError {
                kind: "event format",
                value: other.to_string(),
                expected: "raw, csv, json",
            }),
        }
    }
}

/// Page, format and column projection for an events fetch.
///
/// Same copy-on-write discipline as [`super::SearchOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsOptions {
    page: u32,
    format: EventFormat,
    columns: Vec<String>,
}

impl Default for EventsOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_EVENTS_PAGE,
            format: EventFormat::Json,
            columns: Vec::new(),
        }
    }
}

impl EventsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-indexed page to fetch.
    pub fn page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn format(&self, format: EventFormat) -> Self {
        Self {
            format,
            ..self.clone()
        }
    }

    /// Restrict events to these fields, e.g. `syslog.host`.
    pub fn columns<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page
    }

    pub fn output_format(&self) -> EventFormat {
        self.format
    }

    pub fn column_list(&self) -> &[String] {
        &self.columns
    }

    /// Query parameters contributed by these options.
    ///
    /// Each column becomes its own `columns=` pair; no columns means no pair.
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("page", self.page.to_string())
            .with("format", self.format.as_str())
            .with_all("columns", self.columns.iter().map(String::as_str))
    }
}

/// Fetch one page of events for a result set.
///
/// # Errors
///
/// - `ClientError::Events` for any status other than 200, with the raw body.
/// - `ClientError::Decode` when a 200 body is not a valid events page.
/// - Transport errors unchanged.
pub async fn get_events<T: Transport>(
    client: &LogglyClient<T>,
    rsid: &str,
    options: &EventsOptions,
) -> Result<EventsResponse> {
    debug!(
        "Fetching events for rsid {} (page={}, format={})",
        rsid, options.page, options.format
    );

    let params = options.to_query().with("rsid", rsid);

    let response = client
        .call(Method::GET, EVENTS_PATH, Some(&params), None)
        .await?;
    let (status, body) = read_response(response).await?;

    if status != STATUS_OK {
        return Err(EventsError { status, body }.into());
    }

    decode_json("events", &body)
}
