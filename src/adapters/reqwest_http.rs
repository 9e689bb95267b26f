//! [`HttpClient`] over reqwest.

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, Method, Request, Response};

/// Production transport. Cloning shares the connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client, e.g. one with timeouts or a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
    }
}

fn transport_error(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else if err.is_builder() {
        HttpError::InvalidUrl(message)
    } else if err.is_body() || err.is_decode() {
        HttpError::Io(message)
    } else {
        HttpError::Other(message)
    }
}

/// Headers with non-UTF-8 values are dropped.
fn collect_headers(map: &reqwest::header::HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let mut builder = self
            .client
            .request(reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(Response::with_headers(status, headers, body))
    }
}
