//! Posts and their per-account publishing records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    /// Status for a new post: scheduled when it has a publish time, draft otherwise.
    pub fn for_schedule(scheduled_at: Option<&DateTime<Utc>>) -> Self {
        if scheduled_at.is_some() {
            PostStatus::Scheduled
        } else {
            PostStatus::Draft
        }
    }

    /// Whether the backend's lifecycle allows moving from `self` to `next`.
    ///
    /// draft -> scheduled -> published | failed. A draft may also be
    /// published directly.
    pub fn can_transition_to(&self, next: PostStatus) -> bool {
        matches!(
            (self, next),
            (PostStatus::Draft, PostStatus::Scheduled)
                | (PostStatus::Draft, PostStatus::Published)
                | (PostStatus::Scheduled, PostStatus::Published)
                | (PostStatus::Scheduled, PostStatus::Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
            PostStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of content targeting one or more platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Target platform ids
    #[serde(default)]
    pub platforms: Vec<i64>,
}

/// Join record between a post and the social account it is published through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPlatform {
    pub id: i64,
    pub post_id: i64,
    pub social_account_id: i64,
    pub publish_status: PostStatus,
    #[serde(default)]
    pub platform_content: Option<String>,
    #[serde(default)]
    pub published_url: Option<String>,
    #[serde(default)]
    pub engagement_stats: Option<serde_json::Value>,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: i64,
    pub content: String,
    pub status: PostStatus,
    pub platforms: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub media_urls: Vec<String>,
}
