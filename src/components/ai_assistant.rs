//! AI assistant panel: unused suggestions and turning one into a draft.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{AiSuggestion, SocialAccount};
use crate::query::keys;
use crate::traits::HttpClient;

use super::toast::Toast;

/// Suggestions not yet turned into posts, in backend order.
pub fn unused_suggestions(suggestions: &[AiSuggestion]) -> Vec<AiSuggestion> {
    suggestions.iter().filter(|s| !s.used).cloned().collect()
}

/// Platform ids of the connected accounts, deduplicated, in account order.
pub fn connected_platform_ids(accounts: &[SocialAccount]) -> Vec<i64> {
    let mut ids = Vec::new();
    for account in accounts.iter().filter(|a| a.connected) {
        if !ids.contains(&account.platform_id) {
            ids.push(account.platform_id);
        }
    }
    ids
}

/// Create a draft post from `suggestion` targeting `platforms`.
///
/// Posts, suggestions and analytics are invalidated on success. When the
/// post is created but the suggestion cannot be marked, the same keys are
/// invalidated and the toast says so.
pub async fn create_draft<C: HttpClient>(
    ctx: &AppContext<C>,
    suggestion: &AiSuggestion,
    platforms: &[i64],
) -> Toast {
    let result = ctx
        .queries
        .mutate(&keys::AFTER_POST_CREATED, || {
            ctx.api.create_post_from_suggestion(suggestion.id, platforms, None)
        })
        .await;

    match result {
        Ok(post) => Toast::success("Draft created")
            .with_description(format!("Post {} saved from \"{}\"", post.id, suggestion.title)),
        Err(err @ ApiError::SuggestionNotMarked { .. }) => {
            ctx.queries.invalidate(&keys::AFTER_POST_CREATED);
            Toast::error("Draft created with warnings", err.user_message())
        }
        Err(err) => {
            tracing::warn!("draft from suggestion {} failed: {}", suggestion.id, err);
            Toast::error("Could not create draft", err.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(id: i64, used: bool) -> AiSuggestion {
        AiSuggestion {
            id,
            user_id: 1,
            title: format!("Idea {}", id),
            content: "content".to_string(),
            kind: "content".to_string(),
            used,
            metadata: None,
            created_at: None,
        }
    }

    #[test]
    fn test_unused_suggestions_filters_used() {
        let all = vec![suggestion(1, false), suggestion(2, true), suggestion(3, false)];
        let ids: Vec<i64> = unused_suggestions(&all).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_connected_platform_ids_dedupes() {
        let account = |id, platform_id, connected| SocialAccount {
            id,
            user_id: 1,
            platform_id,
            account_name: "b".to_string(),
            account_id: "b".to_string(),
            access_token: None,
            refresh_token: None,
            token_expiry: None,
            connected,
            stats: None,
        };
        let accounts = vec![account(1, 2, true), account(2, 2, true), account(3, 5, false), account(4, 1, true)];
        assert_eq!(connected_platform_ids(&accounts), vec![2, 1]);
    }
}
