//! Error type for backend and hosted-model API operations.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::models::Post;
use crate::traits::HttpError;

/// Message used for HTTP 429 from the content generator, whatever the body says.
pub const QUOTA_MESSAGE: &str =
    "AI content generation quota exceeded. Please wait before generating more content.";

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{0}")]
    Http(#[from] HttpError),

    /// Server returned a non-success status
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// Content generation quota or rate limit exhausted
    #[error("{0}")]
    QuotaExceeded(String),

    /// Response body did not match the expected shape
    #[error("Invalid response from server: {0}")]
    Json(#[from] serde_json::Error),

    /// Normalized failure from a translation helper
    #[error("{0}")]
    Translation(String),

    /// Hosted inference endpoint returned a non-success status
    #[error("Hosted model request failed: {0}")]
    Inference(String),

    /// A required credential is not configured
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The post exists but the suggestion it came from is still unused
    #[error("Post {} was created but the suggestion could not be marked as used: {source}", .post.id)]
    SuggestionNotMarked {
        post: Box<Post>,
        #[source]
        source: Box<ApiError>,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Http(_) => ErrorCategory::Network,
            ApiError::Status { status, .. } => classify_status(*status),
            ApiError::QuotaExceeded(_) => ErrorCategory::RateLimit,
            ApiError::Json(_) => ErrorCategory::Client,
            ApiError::Translation(_) => ErrorCategory::Server,
            ApiError::Inference(_) => ErrorCategory::Server,
            ApiError::MissingCredential(_) | ApiError::Config(_) => ErrorCategory::Configuration,
            ApiError::SuggestionNotMarked { source, .. } => source.category(),
        }
    }

    /// Check if trying again later might succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::QuotaExceeded(_) => Some(429),
            ApiError::SuggestionNotMarked { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Short text suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http(_) => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            ApiError::Status { message, .. } => message.clone(),
            ApiError::QuotaExceeded(message) => message.clone(),
            ApiError::Json(_) => "Received an invalid response from the server.".to_string(),
            ApiError::Translation(message) => message.clone(),
            ApiError::Inference(status_text) => format!("Model request failed: {}", status_text),
            ApiError::MissingCredential(name) => format!("{} is not configured.", name),
            ApiError::SuggestionNotMarked { .. } => {
                "Post created, but the suggestion is still marked as unused.".to_string()
            }
            ApiError::Config(message) => message.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Http(_) => "E_API_HTTP",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::QuotaExceeded(_) => "E_API_QUOTA",
            ApiError::Json(_) => "E_API_JSON",
            ApiError::Translation(_) => "E_API_TRANSLATE",
            ApiError::Inference(_) => "E_API_INFERENCE",
            ApiError::MissingCredential(_) => "E_API_CREDENTIAL",
            ApiError::SuggestionNotMarked { .. } => "E_API_SAGA",
            ApiError::Config(_) => "E_API_CONFIG",
        }
    }
}

fn classify_status(status: u16) -> ErrorCategory {
    match status {
        429 => ErrorCategory::RateLimit,
        500..=599 => ErrorCategory::Server,
        _ => ErrorCategory::Client,
    }
}
