//! AI content generation.

use futures::stream::{self, StreamExt, TryStreamExt};

use super::{check_status, decode, ApiClient, Method};
use crate::error::{ApiError, ApiResult, QUOTA_MESSAGE};
use crate::models::{AiSuggestion, GenerateContentRequest};
use crate::traits::HttpClient;

const GENERATE_FALLBACK: &str = "Failed to generate content";

/// Prompt for the `index`-th (1-based) of `count` variations of `theme`.
pub fn variation_prompt(theme: &str, index: usize, count: usize) -> String {
    format!("{} (variation {} of {}, make it unique)", theme, index, count)
}

impl<C: HttpClient> ApiClient<C> {
    /// Generate one suggestion via `POST /api/ai-content`.
    ///
    /// HTTP 429 always maps to [`ApiError::QuotaExceeded`], independent of the
    /// body. Other failures carry the server's message or a fallback.
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> ApiResult<AiSuggestion> {
        let response = self
            .send_raw(Method::Post, "/api/ai-content", request)
            .await
            .map_err(|err| {
                tracing::warn!("content generation request failed: {}", err);
                err
            })?;

        if response.status == 429 {
            tracing::warn!("content generation quota exhausted");
            return Err(ApiError::QuotaExceeded(QUOTA_MESSAGE.to_string()));
        }

        decode(check_status(response, GENERATE_FALLBACK)?)
    }

    /// Generate `count` variations of `theme`, one request at a time.
    ///
    /// Requests run strictly in order. The first failure aborts the run:
    /// later requests are not sent and earlier results are dropped.
    pub async fn generate_content_variations(
        &self,
        theme: &str,
        count: usize,
        kind: &str,
    ) -> ApiResult<Vec<AiSuggestion>> {
        let mut suggestions = Vec::with_capacity(count);
        for index in 1..=count {
            let request = GenerateContentRequest::new(variation_prompt(theme, index, count)).with_kind(kind);
            let suggestion = self.generate_content(&request).await.map_err(|err| {
                tracing::warn!("variation {} of {} failed: {}", index, count, err);
                err
            })?;
            suggestions.push(suggestion);
        }
        Ok(suggestions)
    }

    /// Generate `count` variations with at most `limit` requests in flight.
    ///
    /// Results keep prompt order. The first failure drops every in-flight and
    /// pending request and is returned as the error.
    pub async fn generate_content_variations_concurrent(
        &self,
        theme: &str,
        count: usize,
        kind: &str,
        limit: usize,
    ) -> ApiResult<Vec<AiSuggestion>> {
        let requests: Vec<GenerateContentRequest> = (1..=count)
            .map(|index| GenerateContentRequest::new(variation_prompt(theme, index, count)).with_kind(kind))
            .collect();

        stream::iter(requests)
            .map(|request| async move { self.generate_content(&request).await })
            .buffered(limit.max(1))
            .try_collect()
            .await
    }
}
