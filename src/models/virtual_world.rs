//! Web3 / virtual-world integrations.
//!
//! These mirror the social platform shapes: a world is a platform, an avatar
//! account is a social account, and world posts and messages are published
//! through that account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::PostStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWorld {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// Backing chain, e.g. "ethereum"
    #[serde(default)]
    pub chain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWorldAccount {
    pub id: i64,
    pub user_id: i64,
    pub world_id: i64,
    #[serde(default)]
    pub wallet_address: Option<String>,
    pub avatar_name: String,
    #[serde(default)]
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWorldPost {
    pub id: i64,
    pub account_id: i64,
    pub content: String,
    #[serde(default)]
    pub status: PostStatus,
    /// In-world coordinates or parcel name
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWorldMessage {
    pub id: i64,
    pub account_id: i64,
    pub recipient: String,
    pub content: String,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}
