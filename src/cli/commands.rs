//! Executes helper subcommands against the backend.

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::models::{AiSuggestion, BatchTranslateRequest, GenerateContentRequest, TranslateRequest};
use crate::traits::HttpClient;

use super::args::{CliCommand, DEFAULT_CONTENT_KIND};

/// Run one helper command and return what should be printed.
///
/// `Version`, `Help`, `RunTui` and `Invalid` are handled by the caller and
/// produce no output here.
pub async fn execute<C: HttpClient>(command: &CliCommand, ctx: &AppContext<C>) -> ApiResult<String> {
    let api = &ctx.api;
    match command {
        CliCommand::Generate {
            prompt,
            kind,
            platform,
            audience,
            use_gemini,
        } => {
            let mut request = GenerateContentRequest::new(prompt.clone());
            if let Some(kind) = kind {
                request = request.with_kind(kind.clone());
            }
            if let Some(platform) = platform {
                request = request.with_platform(platform.clone());
            }
            if let Some(audience) = audience {
                request = request.with_audience(audience.clone());
            }
            if *use_gemini {
                request = request.with_gemini(true);
            }
            let suggestion = api.generate_content(&request).await?;
            Ok(format_suggestion(&suggestion))
        }
        CliCommand::Variations {
            theme,
            count,
            kind,
            concurrency,
        } => {
            let kind = kind.as_deref().unwrap_or(DEFAULT_CONTENT_KIND);
            let suggestions = match concurrency {
                Some(limit) => {
                    api.generate_content_variations_concurrent(theme, *count, kind, *limit)
                        .await?
                }
                None => api.generate_content_variations(theme, *count, kind).await?,
            };
            Ok(suggestions
                .iter()
                .map(format_suggestion)
                .collect::<Vec<_>>()
                .join("\n---\n"))
        }
        CliCommand::Translate {
            text,
            target,
            source,
        } => {
            let mut request = TranslateRequest::new(text.clone(), target.clone());
            if let Some(source) = source {
                request = request.with_source(source.clone());
            }
            let response = api.translate_text(&request).await?;
            Ok(response.translated_text)
        }
        CliCommand::Detect { text } => {
            let response = api.detect_language(text).await?;
            Ok(match response.confidence {
                Some(confidence) => format!("{} ({:.2})", response.language, confidence),
                None => response.language,
            })
        }
        CliCommand::BatchTranslate {
            texts,
            target,
            source,
        } => {
            let request = BatchTranslateRequest {
                texts: texts.clone(),
                target_language: target.clone(),
                source_language: source.clone(),
            };
            let response = api.batch_translate(&request).await?;
            Ok(response.translations.join("\n"))
        }
        CliCommand::Infer { model, prompt } => {
            let output = ctx.hosted.query(model, prompt).await?;
            Ok(serde_json::to_string_pretty(&output)?)
        }
        CliCommand::UseSuggestion { id } => {
            let suggestion = api.use_suggestion(*id).await?;
            Ok(format!("Suggestion {} marked as used", suggestion.id))
        }
        CliCommand::PostFromSuggestion {
            id,
            platforms,
            scheduled_at,
        } => {
            let post = api
                .create_post_from_suggestion(*id, platforms, *scheduled_at)
                .await?;
            Ok(format!("Created {} post {}", post.status, post.id))
        }
        CliCommand::Version | CliCommand::Help | CliCommand::RunTui | CliCommand::Invalid(_) => {
            Ok(String::new())
        }
    }
}

fn format_suggestion(suggestion: &AiSuggestion) -> String {
    let mut out = format!("{}\n\n{}", suggestion.title, suggestion.content);
    if let Some(metadata) = &suggestion.metadata {
        if !metadata.hashtags.is_empty() {
            out.push_str("\n\n");
            out.push_str(&metadata.hashtags.join(" "));
        }
    }
    out
}
