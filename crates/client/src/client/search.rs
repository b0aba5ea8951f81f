//! Fluent search handle.

use crate::client::LogglyClient;
use crate::endpoints::{self, SearchOptions, SearchOrder};
use crate::error::Result;
use crate::models::SearchResponse;
use crate::transport::Transport;

/// A search bound to a client.
///
/// Every setter returns a new handle and leaves the receiver as it was, so a
/// partially configured handle can be shared as a template.
#[derive(Debug)]
pub struct Search<'a, T> {
    client: &'a LogglyClient<T>,
    options: SearchOptions,
}

impl<T> Clone for Search<'_, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            options: self.options.clone(),
        }
    }
}

impl<'a, T: Transport> Search<'a, T> {
    pub(crate) fn new(client: &'a LogglyClient<T>) -> Self {
        Self {
            client,
            options: SearchOptions::default(),
        }
    }

    pub fn from(&self, from: impl Into<String>) -> Self {
        self.with_options(self.options.from(from))
    }

    pub fn until(&self, until: impl Into<String>) -> Self {
        self.with_options(self.options.until(until))
    }

    /// Alias for [`Search::until`].
    pub fn end(&self, until: impl Into<String>) -> Self {
        self.until(until)
    }

    pub fn order(&self, order: SearchOrder) -> Self {
        self.with_options(self.options.order(order))
    }

    /// Replace all options at once.
    pub fn with_options(&self, options: SearchOptions) -> Self {
        Self {
            client: self.client,
            options,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run the search for up to `size` events matching `query`.
    pub async fn execute(&self, size: usize, query: &str) -> Result<SearchResponse> {
        endpoints::search(self.client, size, query, &self.options).await
    }
}
