//! Aggregate analytics computed by the backend.

use serde::{Deserialize, Serialize};

/// Read-only dashboard aggregate returned by `GET /api/analytics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default)]
    pub total_followers: u64,
    /// Percentage, e.g. 4.7
    #[serde(default)]
    pub engagement_rate: f64,
    /// Percentage change in reach over the last period; may be negative
    #[serde(default)]
    pub reach_growth: f64,
    #[serde(default)]
    pub top_platform: Option<String>,
    #[serde(default)]
    pub published_posts: u64,
    #[serde(default)]
    pub scheduled_posts: u64,
    #[serde(default)]
    pub recent_engagement: Vec<EngagementPoint>,
    #[serde(default)]
    pub platform_stats: Vec<PlatformStat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementPoint {
    /// Day label as sent by the backend (e.g. "2026-10-14" or "Mon")
    pub date: String,
    pub engagement: u64,
}

/// Per-platform totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStat {
    pub platform_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub engagement: f64,
    #[serde(default)]
    pub posts: u64,
}
