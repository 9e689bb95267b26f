//! Client for the external hosted-model inference endpoint.

use crate::error::{ApiError, ApiResult};
use crate::traits::{HttpClient, Request};

/// Calls `POST {base_url}/models/{model}` with a bearer credential.
pub struct HostedModelClient<C: HttpClient> {
    base_url: String,
    api_key: Option<String>,
    http: C,
}

impl<C: HttpClient> HostedModelClient<C> {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, http: C) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            http,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send `prompt` to `model` and return the raw JSON output.
    ///
    /// The output shape depends on the model, so it is not decoded further.
    /// A non-2xx status fails with the status text.
    pub async fn query(&self, model: &str, prompt: &str) -> ApiResult<serde_json::Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingCredential("HUGGINGFACE_API_KEY"))?;

        let url = format!("{}/models/{}", self.base_url, model);
        let body = serde_json::json!({ "inputs": prompt }).to_string();
        let request = Request::post(url, body)
            .with_json_headers()
            .bearer_auth(api_key);

        tracing::debug!("querying hosted model {}", model);
        let response = self.http.send(request).await.map_err(|err| {
            tracing::warn!("hosted model {} unreachable: {}", model, err);
            ApiError::from(err)
        })?;

        if !response.is_success() {
            let status_text = response.status_text();
            tracing::warn!("hosted model {} returned {}", model, status_text);
            return Err(ApiError::Inference(status_text));
        }

        Ok(response.json()?)
    }
}
