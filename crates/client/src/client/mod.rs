//! Main Loggly retrieval client.
//!
//! This module provides the primary [`LogglyClient`] for the `/apiv2`
//! retrieval API. It builds authenticated requests and hands them to a
//! [`Transport`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: the [`Search`] handle
//! - `events`: the [`Events`] handle
//!
//! # What this module does NOT handle:
//! - Status classification and JSON decoding (delegated to [`crate::endpoints`])
//! - Network I/O and retries (delegated to [`crate::transport`])
//!
//! # Invariants
//! - A client never changes after construction; handles borrow it immutably.
//! - Every request carries HTTP Basic Auth built from the client's credentials.
//! - A query string is appended only when parameters are given and non-empty.

pub mod builder;
mod events;
mod search;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request, Url};
use tracing::debug;

use crate::endpoints::QueryParams;
use crate::error::Result;
use crate::transport::{DefaultTransport, Transport};
use loggly_config::Credentials;

pub use events::Events;
pub use search::Search;

/// Loggly retrieval API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use loggly_client::LogglyClient;
///
/// let client = LogglyClient::new("acme", "alice", "s3cret")?;
/// let found = client.search().from("-2h").execute(10, "tag:alfa").await?;
/// let page = client
///     .events()
///     .columns(["syslog.host", "syslog.timestamp"])
///     .execute(found.rsid())
///     .await?;
/// ```
#[derive(Debug)]
pub struct LogglyClient<T = DefaultTransport> {
    pub(crate) transport: T,
    pub(crate) base_url: Url,
    pub(crate) credentials: Credentials,
    pub(crate) auth_header: HeaderValue,
}

impl LogglyClient {
    /// Create a client for `<account>.loggly.com` with the default retrying transport.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if `account` is not a valid host label.
    pub fn new(
        account: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .account(account)
            .credentials(username, password)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> builder::LogglyClientBuilder {
        builder::LogglyClientBuilder::new()
    }
}

impl<T: Transport> LogglyClient<T> {
    /// A search handle seeded with the default options.
    pub fn search(&self) -> Search<'_, T> {
        Search::new(self)
    }

    /// An events handle seeded with the default options.
    pub fn events(&self) -> Events<'_, T> {
        Events::new(self)
    }

    /// Scheme and host every request goes to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Username sent with Basic Auth.
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Transport every request goes through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for `path`, with `query` encoded when it has values.
    pub(crate) fn endpoint_url(&self, path: &str, query: Option<&QueryParams>) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        match query {
            Some(params) if !params.is_empty() => url.set_query(Some(&params.encode())),
            _ => url.set_query(None),
        }
        url
    }

    /// Build an authenticated request and execute it through the transport.
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<Vec<u8>>,
    ) -> Result<T::Response> {
        let url = self.endpoint_url(path, query);
        debug!(%method, path, "Calling retrieval API");

        let mut request = Request::new(method, url);
        request
            .headers_mut()
            .insert(AUTHORIZATION, self.auth_header.clone());
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        self.transport.execute(request).await
    }
}
