//! Social platforms and the accounts connected to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A social network the backend can publish to (e.g. Twitter, Instagram).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier, e.g. "linkedin"
    pub slug: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Brand color as a hex string
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// A user's account on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    pub id: i64,
    pub user_id: i64,
    pub platform_id: i64,
    pub account_name: String,
    pub account_id: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub connected: bool,
    /// Platform-specific follower/engagement counters, shape owned by the backend
    #[serde(default)]
    pub stats: Option<serde_json::Value>,
}

/// Body of `POST /api/accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectAccountRequest {
    pub user_id: i64,
    pub platform_id: i64,
    pub account_name: String,
    pub account_id: String,
    /// OAuth token, when the platform handshake already produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub connected: bool,
}
