//! Mock configuration helpers.
//!
//! Re-exports the crate's mock HTTP client and adds a builder keyed by
//! backend path instead of full URL.

pub use socialdash::adapters::mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use socialdash::traits::{Headers, HttpClient, HttpError, Method, Request, Response};

use serde_json::Value;

use super::url;

/// Builder for a [`MockHttpClient`] pointed at `common::BASE`.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Fixed JSON response for `method path`.
    pub fn with_json(self, method: &str, path: &str, status: u16, body: Value) -> Self {
        self.client
            .set_method_response(method, &url(path), MockResponse::json(status, body));
        self
    }

    /// One-shot response, consumed before any fixed response for the same route.
    pub fn with_queued(self, method: &str, path: &str, response: MockResponse) -> Self {
        self.client.push_response(method, &url(path), response);
        self
    }

    /// Transport failure for `method path`.
    pub fn with_transport_error(self, method: &str, path: &str) -> Self {
        self.client.set_method_response(
            method,
            &url(path),
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Methods and URLs of recorded requests, in order.
pub fn request_log(client: &MockHttpClient) -> Vec<String> {
    client
        .get_requests()
        .iter()
        .map(|request| format!("{} {}", request.method, request.url))
        .collect()
}
