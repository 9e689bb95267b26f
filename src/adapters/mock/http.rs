//! In-memory [`HttpClient`] with scripted responses and a request log.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, Request, Response};

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// "GET", "POST" or "PUT"
    pub method: String,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.body.as_deref()?).ok()
    }
}

impl From<Request> for RecordedRequest {
    fn from(request: Request) -> Self {
        Self {
            method: request.method.as_str().to_string(),
            url: request.url,
            headers: request.headers,
            body: request.body,
        }
    }
}

/// What a scripted route answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A response with any status
    Success(Response),
    /// A transport failure
    Error(HttpError),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    pub fn empty(status: u16) -> Self {
        MockResponse::Success(Response::new(status, bytes::Bytes::new()))
    }
}

#[derive(Debug, Default)]
struct MockState {
    /// Keyed by `"METHOD url"` or by bare URL
    fixed: HashMap<String, MockResponse>,
    /// One-shot responses keyed by `"METHOD url"`
    queued: HashMap<String, VecDeque<MockResponse>>,
    fallback: Option<MockResponse>,
    log: Vec<RecordedRequest>,
}

impl MockState {
    /// Queued, then `"METHOD url"`, then URL, then longest URL prefix, then fallback.
    fn lookup(&mut self, method: &str, url: &str) -> Option<MockResponse> {
        let key = route_key(method, url);
        if let Some(response) = self.queued.get_mut(&key).and_then(VecDeque::pop_front) {
            return Some(response);
        }
        if let Some(response) = self.fixed.get(&key).or_else(|| self.fixed.get(url)) {
            return Some(response.clone());
        }
        self.fixed
            .iter()
            .filter(|(route, _)| !route.contains(' ') && url.starts_with(route.as_str()))
            .max_by_key(|(route, _)| route.len())
            .map(|(_, response)| response.clone())
            .or_else(|| self.fallback.clone())
    }
}

fn route_key(method: &str, url: &str) -> String {
    format!("{} {}", method, url)
}

/// Scripted transport for tests. Clones share routes and the request log.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response("http://test/api/platforms", MockResponse::json(200, json!([])));
/// http.push_response("POST", "http://test/api/ai-content", MockResponse::empty(429));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer every method on `url`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.state().fixed.insert(url.to_string(), response);
    }

    pub fn set_method_response(&self, method: &str, url: &str, response: MockResponse) {
        self.state().fixed.insert(route_key(method, url), response);
    }

    /// Answer the next `method url` once, ahead of any fixed route.
    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        self.state()
            .queued
            .entry(route_key(method, url))
            .or_default()
            .push_back(response);
    }

    /// Answer anything no route matches.
    pub fn set_default_response(&self, response: MockResponse) {
        self.state().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.state().log.clone()
    }

    pub fn requests_to(&self, method: &str, url: &str) -> Vec<RecordedRequest> {
        self.state()
            .log
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state().log.clear();
    }

    pub fn clear_responses(&self) {
        let mut state = self.state();
        state.fixed.clear();
        state.queued.clear();
        state.fallback = None;
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let mut state = self.state();
        let method = request.method.as_str();
        let answer = state.lookup(method, &request.url);
        let url = request.url.clone();
        state.log.push(request.into());

        match answer {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {} {}", method, url))),
        }
    }
}
