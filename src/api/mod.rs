//! Backend API client.
//!
//! [`ApiClient`] wraps one [`HttpClient`] and exposes one method per backend
//! operation. Each method performs a single logical operation, checks the
//! status, and decodes the JSON body into a model type.
//!
//! The methods are split by concern:
//! - [`content`]: AI content generation and variations
//! - [`suggestions`]: suggestion lookup, consumption and the post saga
//! - [`translation`]: translate / detect / batch helpers
//! - [`resources`]: platforms, accounts, analytics and posts
//! - [`hosted`]: the external hosted-model inference endpoint

pub mod content;
pub mod hosted;
pub mod resources;
pub mod suggestions;
pub mod translation;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Session;
use crate::error::{ApiError, ApiResult};
use crate::traits::{HttpClient, Method, Request, Response};

pub use hosted::HostedModelClient;

/// Client for the dashboard backend.
///
/// # Example
///
/// ```ignore
/// use socialdash::adapters::ReqwestHttpClient;
/// use socialdash::api::ApiClient;
/// use socialdash::config::Session;
///
/// let api = ApiClient::new("http://localhost:5000", ReqwestHttpClient::new(), Session::new(1, "YourBrand"));
/// let platforms = api.list_platforms().await?;
/// ```
pub struct ApiClient<C: HttpClient> {
    base_url: String,
    http: C,
    session: Session,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(base_url: impl Into<String>, http: C, session: Session) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> ApiResult<T> {
        tracing::debug!("GET {}", path);
        let request = Request::get(self.url(path)).with_json_headers();
        let response = self.http.send(request).await?;
        decode(check_status(response, fallback)?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B, fallback: &str) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_raw(method, path, body).await?;
        decode(check_status(response, fallback)?)
    }

    /// Send a JSON body and return the response without interpreting the status.
    async fn send_raw<B>(&self, method: Method, path: &str, body: &B) -> ApiResult<Response>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!("{} {}", method, path);
        let request = Request::new(method, self.url(path))
            .with_body(serde_json::to_string(body)?)
            .with_json_headers();
        Ok(self.http.send(request).await?)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    Ok(response.json()?)
}

/// Turn a non-2xx response into [`ApiError::Status`].
///
/// The message comes from the JSON body's `message` or `error` field, or
/// `fallback` when the body has neither.
pub(crate) fn check_status(response: Response, fallback: &str) -> ApiResult<Response> {
    if response.is_success() {
        return Ok(response);
    }
    let message = extract_error_message(&response.body).unwrap_or_else(|| fallback.to_string());
    tracing::warn!("request failed with HTTP {}: {}", response.status, message);
    Err(ApiError::Status {
        status: response.status,
        message,
    })
}

/// Pull a human-readable message out of a JSON error body.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
