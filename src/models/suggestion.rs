//! AI content suggestions and the generation request that produces them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An AI-generated content draft.
///
/// `used` flips to true once, when the suggestion is turned into a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    /// Kind of content, e.g. "content", "caption", "hashtags"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub used: bool,
    #[serde(default)]
    pub metadata: Option<SuggestionMetadata>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Generation hints the backend attaches to a suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionMetadata {
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub call_to_action: Option<String>,
    #[serde(default)]
    pub best_time: Option<String>,
    /// Audience match score, 0-100
    #[serde(default)]
    pub audience_match: Option<f64>,
}

/// Body of `POST /api/ai-content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub prompt: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Ask the backend to route generation through Gemini
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_gemini: Option<bool>,
}

impl GenerateContentRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_gemini(mut self, use_gemini: bool) -> Self {
        self.use_gemini = Some(use_gemini);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_unset_hints() {
        let value = serde_json::to_value(GenerateContentRequest::new("coffee")).unwrap();
        assert_eq!(value, serde_json::json!({"prompt": "coffee"}));
    }

    #[test]
    fn test_request_renames_type_and_gemini() {
        let request = GenerateContentRequest::new("coffee")
            .with_kind("caption")
            .with_gemini(true)
            .with_keywords(vec!["latte".to_string()]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "caption");
        assert_eq!(value["useGemini"], true);
        assert_eq!(value["keywords"][0], "latte");
    }

    #[test]
    fn test_suggestion_with_metadata() {
        let json = r##"{
            "id": 7, "userId": 1, "title": "Morning", "content": "Start bright",
            "type": "content", "used": false,
            "metadata": {"sentiment": "positive", "hashtags": ["#am"], "audienceMatch": 87}
        }"##;
        let suggestion: AiSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.kind, "content");
        let metadata = suggestion.metadata.unwrap();
        assert_eq!(metadata.hashtags, vec!["#am".to_string()]);
        assert_eq!(metadata.audience_match, Some(87.0));
        assert!(metadata.best_time.is_none());
    }
}
