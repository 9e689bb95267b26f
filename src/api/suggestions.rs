//! AI suggestions and turning them into posts.

use chrono::{DateTime, Utc};

use super::{ApiClient, Method};
use crate::error::{ApiError, ApiResult};
use crate::models::{AiSuggestion, CreatePostRequest, Post, PostStatus};
use crate::traits::HttpClient;

impl<C: HttpClient> ApiClient<C> {
    /// `GET /api/ai-suggestions`
    pub async fn list_suggestions(&self) -> ApiResult<Vec<AiSuggestion>> {
        self.get_json("/api/ai-suggestions", "Failed to load suggestions")
            .await
    }

    /// `GET /api/ai-suggestions/:id`
    pub async fn get_suggestion(&self, id: i64) -> ApiResult<AiSuggestion> {
        self.get_json(&format!("/api/ai-suggestions/{}", id), "Failed to load suggestion")
            .await
    }

    /// Mark a suggestion as consumed. Returns the updated suggestion.
    pub async fn use_suggestion(&self, id: i64) -> ApiResult<AiSuggestion> {
        self.send_json(
            Method::Put,
            &format!("/api/ai-suggestions/{}/use", id),
            &serde_json::json!({}),
            "Failed to mark suggestion as used",
        )
        .await
    }

    /// Create a post from a suggestion's content, then mark the suggestion used.
    ///
    /// Steps run in order and each waits for the previous one:
    /// 1. fetch the suggestion
    /// 2. create the post (`scheduled` if `scheduled_at` is set, else `draft`)
    /// 3. mark the suggestion used
    ///
    /// There is no rollback. If step 3 fails the post still exists and the
    /// error is [`ApiError::SuggestionNotMarked`], which carries it.
    pub async fn create_post_from_suggestion(
        &self,
        suggestion_id: i64,
        platforms: &[i64],
        scheduled_at: Option<DateTime<Utc>>,
    ) -> ApiResult<Post> {
        let suggestion = self.get_suggestion(suggestion_id).await?;

        let request = CreatePostRequest {
            user_id: self.session.user_id,
            content: suggestion.content,
            status: PostStatus::for_schedule(scheduled_at.as_ref()),
            platforms: platforms.to_vec(),
            scheduled_at,
            media_urls: Vec::new(),
        };
        let post = self.create_post(&request).await?;
        tracing::info!(
            "created {} post {} from suggestion {}",
            post.status,
            post.id,
            suggestion_id
        );

        if let Err(err) = self.use_suggestion(suggestion_id).await {
            tracing::error!(
                "post {} exists but suggestion {} is still unused: {}",
                post.id,
                suggestion_id,
                err
            );
            return Err(ApiError::SuggestionNotMarked {
                post: Box::new(post),
                source: Box::new(err),
            });
        }

        Ok(post)
    }
}
