//! Fluent events handle.

use crate::client::LogglyClient;
use crate::endpoints::{self, EventFormat, EventsOptions};
use crate::error::Result;
use crate::models::EventsResponse;
use crate::transport::Transport;

/// An events fetch bound to a client. Setters are copy-on-write like [`super::Search`].
#[derive(Debug)]
pub struct Events<'a, T> {
    client: &'a LogglyClient<T>,
    options: EventsOptions,
}

impl<T> Clone for Events<'_, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            options: self.options.clone(),
        }
    }
}

impl<'a, T: Transport> Events<'a, T> {
    pub(crate) fn new(client: &'a LogglyClient<T>) -> Self {
        Self {
            client,
            options: EventsOptions::default(),
        }
    }

    pub fn page(&self, page: u32) -> Self {
        self.with_options(self.options.page(page))
    }

    pub fn format(&self, format: EventFormat) -> Self {
        self.with_options(self.options.format(format))
    }

    pub fn columns<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_options(self.options.columns(columns))
    }

    pub fn with_options(&self, options: EventsOptions) -> Self {
        Self {
            client: self.client,
            options,
        }
    }

    pub fn options(&self) -> &EventsOptions {
        &self.options
    }

    /// Fetch the configured page of the result set `rsid`.
    pub async fn execute(&self, rsid: &str) -> Result<EventsResponse> {
        endpoints::get_events(self.client, rsid, &self.options).await
    }
}
