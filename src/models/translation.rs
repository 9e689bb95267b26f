//! Request and response shapes of the translation helper endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/translate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    /// ISO 639-1 code, e.g. "es"
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            source_language: None,
        }
    }

    pub fn with_source(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = Some(source_language.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

/// Body of `POST /api/detect-language`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectLanguageRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectLanguageResponse {
    pub language: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Body of `POST /api/batch-translate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTranslateRequest {
    pub texts: Vec<String>,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

/// Translations in the same order as the request's `texts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchTranslateResponse {
    pub translations: Vec<String>,
}
