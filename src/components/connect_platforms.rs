//! Connect-platforms panel: which platforms can still be connected, and the
//! connect action itself.

use crate::context::AppContext;
use crate::models::{Platform, SocialAccount};
use crate::query::keys;
use crate::traits::HttpClient;

use super::toast::Toast;

/// At most this many platforms are offered at once.
pub const MAX_AVAILABLE_PLATFORMS: usize = 4;

/// Platforms with no account yet, in input order, capped at
/// [`MAX_AVAILABLE_PLATFORMS`].
pub fn available_platforms(platforms: &[Platform], accounts: &[SocialAccount]) -> Vec<Platform> {
    platforms
        .iter()
        .filter(|platform| !accounts.iter().any(|account| account.platform_id == platform.id))
        .take(MAX_AVAILABLE_PLATFORMS)
        .cloned()
        .collect()
}

/// View model for the connect panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectPlatforms {
    available: Vec<Platform>,
}

impl ConnectPlatforms {
    pub fn new(platforms: &[Platform], accounts: &[SocialAccount]) -> Self {
        Self {
            available: available_platforms(platforms, accounts),
        }
    }

    pub fn available(&self) -> &[Platform] {
        &self.available
    }

    /// Platform behind the 0-based slot `index`.
    pub fn get(&self, index: usize) -> Option<&Platform> {
        self.available.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Connect the session user to `platform`.
    ///
    /// Runs as a cache mutation: on success the account and analytics queries
    /// are invalidated. Failures are logged and reported with a generic toast.
    pub async fn connect<C: HttpClient>(ctx: &AppContext<C>, platform: &Platform) -> Toast {
        let result = ctx
            .queries
            .mutate(&keys::AFTER_CONNECT, || ctx.api.connect_platform(platform))
            .await;

        match result {
            Ok(account) => {
                tracing::info!("connected {} (account {})", platform.name, account.id);
                Toast::success(format!("{} connected", platform.name))
            }
            Err(err) => {
                tracing::warn!("connect {} failed [{}]: {}", platform.slug, err.error_code(), err);
                Toast::error(
                    "Connection failed",
                    format!("Could not connect to {}. Please try again.", platform.name),
                )
            }
        }
    }
}
