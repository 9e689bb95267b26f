//! Translation helper endpoints.
//!
//! Every failure, transport, HTTP or decoding, is logged and normalized into
//! [`ApiError::Translation`] carrying the original message or a fixed fallback.

use super::{ApiClient, Method};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    BatchTranslateRequest, BatchTranslateResponse, DetectLanguageRequest, DetectLanguageResponse,
    TranslateRequest, TranslateResponse,
};
use crate::traits::HttpClient;

pub const TRANSLATE_FALLBACK: &str = "Failed to translate text";
pub const DETECT_FALLBACK: &str = "Failed to detect language";
pub const BATCH_FALLBACK: &str = "Failed to batch translate texts";

impl<C: HttpClient> ApiClient<C> {
    pub async fn translate_text(&self, request: &TranslateRequest) -> ApiResult<TranslateResponse> {
        self.send_json(Method::Post, "/api/translate", request, TRANSLATE_FALLBACK)
            .await
            .map_err(|err| normalize(err, TRANSLATE_FALLBACK))
    }

    pub async fn detect_language(&self, text: &str) -> ApiResult<DetectLanguageResponse> {
        let request = DetectLanguageRequest {
            text: text.to_string(),
        };
        self.send_json(Method::Post, "/api/detect-language", &request, DETECT_FALLBACK)
            .await
            .map_err(|err| normalize(err, DETECT_FALLBACK))
    }

    pub async fn batch_translate(&self, request: &BatchTranslateRequest) -> ApiResult<BatchTranslateResponse> {
        self.send_json(Method::Post, "/api/batch-translate", request, BATCH_FALLBACK)
            .await
            .map_err(|err| normalize(err, BATCH_FALLBACK))
    }
}

fn normalize(err: ApiError, fallback: &str) -> ApiError {
    tracing::warn!("{}: {}", fallback, err);
    let message = match err {
        ApiError::Status { message, .. } => message,
        ApiError::Http(transport) => transport.to_string(),
        ApiError::Translation(message) => message,
        json @ ApiError::Json(_) => json.to_string(),
        _ => String::new(),
    };
    if message.trim().is_empty() {
        ApiError::Translation(fallback.to_string())
    } else {
        ApiError::Translation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::Session;
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://backend.test";

    fn client(http: MockHttpClient) -> ApiClient<MockHttpClient> {
        ApiClient::new(BASE, http, Session::new(1, "YourBrand"))
    }

    #[tokio::test]
    async fn test_translate_text_success() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{}/api/translate", BASE),
            MockResponse::json(200, json!({"translatedText": "hola", "detectedSourceLanguage": "en"})),
        );

        let response = client(http.clone())
            .translate_text(&TranslateRequest::new("hello", "es"))
            .await
            .unwrap();

        assert_eq!(response.translated_text, "hola");
        assert_eq!(http.get_requests()[0].json_body().unwrap()["targetLanguage"], "es");
    }

    #[tokio::test]
    async fn test_translate_server_message_is_kept() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(400, json!({"message": "Unsupported language: xx"})));

        let err = client(http)
            .translate_text(&TranslateRequest::new("hello", "xx"))
            .await
            .unwrap_err();

        match err {
            ApiError::Translation(message) => assert_eq!(message, "Unsupported language: xx"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detect_keeps_decode_error_message() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, json!({"unexpected": true})));

        let err = client(http).detect_language("bonjour").await.unwrap_err();

        match err {
            ApiError::Translation(message) => {
                assert_ne!(message, DETECT_FALLBACK);
                assert!(message.contains("missing field"), "{}", message);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_batch_translate_transport_error_message() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "connection refused".to_string(),
        )));

        let request = BatchTranslateRequest {
            texts: vec!["a".to_string(), "b".to_string()],
            target_language: "de".to_string(),
            source_language: None,
        };
        let err = client(http).batch_translate(&request).await.unwrap_err();

        assert_eq!(err.to_string(), "Connection failed: connection refused");
    }

    #[tokio::test]
    async fn test_batch_translate_keeps_order() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, json!({"translations": ["eins", "zwei"]})));

        let request = BatchTranslateRequest {
            texts: vec!["one".to_string(), "two".to_string()],
            target_language: "de".to_string(),
            source_language: Some("en".to_string()),
        };
        let response = client(http).batch_translate(&request).await.unwrap();

        assert_eq!(response.translations, vec!["eins", "zwei"]);
    }
}
