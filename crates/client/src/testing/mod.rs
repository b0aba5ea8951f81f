//! Testing utilities for Loggly client tests.
//!
//! This module provides helper functions for loading test fixtures and a
//! scripted [`MockTransport`] that records requests and counts released
//! responses. Available when running tests or when the `test-utils` feature
//! is enabled.
//!
//! # Example
//! ```ignore
//! use loggly_client::testing::{MockTransport, load_fixture_str};
//!
//! let transport = MockTransport::new();
//! transport.push_response(200, load_fixture_str("search/search_success.json"));
//! ```

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use reqwest::{Method, Request, Url};

use crate::error::Result;
use crate::transport::{Transport, TransportResponse};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "search/search_success.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    serde_json::from_str(&load_fixture_str(fixture_path)).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim, for serving as a response body.
pub fn load_fixture_str(path: &str) -> String {
    let full_path = fixture_path(path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// What [`MockTransport`] saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub authorization: Option<String>,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<(u16, Bytes)>,
    requests: Vec<RecordedRequest>,
}

/// In-memory transport answering from a script of `(status, body)` pairs.
///
/// Cloning shares the script, the request log and the release counter.
///
/// # Panics
/// `execute` panics when the script is exhausted.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
    released: Arc<AtomicUsize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request.
    pub fn push_response(&self, status: u16, body: impl Into<Bytes>) {
        self.lock().responses.push_back((status, body.into()));
    }

    /// Every request executed so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// How many responses have been released (consumed or dropped).
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Scripted responses not yet handed out.
    pub fn pending(&self) -> usize {
        self.lock().responses.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Response produced by [`MockTransport`]; bumps the release counter on drop.
#[derive(Debug)]
pub struct MockResponse {
    status: u16,
    body: Bytes,
    released: Arc<AtomicUsize>,
}

impl Drop for MockResponse {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl TransportResponse for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn into_body(mut self) -> Result<Bytes> {
        Ok(std::mem::take(&mut self.body))
    }
}

impl Transport for MockTransport {
    type Response = MockResponse;

    async fn execute(&self, request: Request) -> Result<MockResponse> {
        let recorded = RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            authorization: request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: request.body().and_then(|b| b.as_bytes()).map(<[u8]>::to_vec),
        };

        let (status, body) = {
            let mut state = self.lock();
            state.requests.push(recorded);
            let seen = state.requests.len();
            state.responses.pop_front().unwrap_or_else(|| {
                panic!("MockTransport: no scripted response for request #{seen}")
            })
        };

        Ok(MockResponse {
            status,
            body,
            released: Arc::clone(&self.released),
        })
    }
}
