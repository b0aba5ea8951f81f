//! Query-string parameters for retrieval API calls.
//!
//! [`QueryParams`] is a multi-valued map with sorted keys. A key may carry
//! several values (`columns=a&columns=b`); a key with no values contributes
//! nothing to the encoded string.
//!
//! # Example
//!
//! ```
//! use loggly_client::endpoints::QueryParams;
//!
//! let params = QueryParams::new().with("q", "tag:alfa").with("order", "asc");
//! assert_eq!(params.encode(), "order=asc&q=tag%3Aalfa");
//! ```

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Ordered, multi-valued query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, Vec<String>>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a single value, replacing earlier values.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), vec![value.into()]);
        self
    }

    /// Set `key` to every value in `values`, replacing earlier values.
    pub fn with_all<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(key.to_string(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Merge `other` into `self`; keys present in `other` win.
    pub fn merge(mut self, other: QueryParams) -> Self {
        self.0.extend(other.0);
        self
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value for `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no key carries a value.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Encode as `application/x-www-form-urlencoded`, keys sorted.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.0 {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    /// Parse an encoded query string (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            map.entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        Self(map)
    }
}
