//! Dashboard page: loads every query through the cache and derives the cards
//! and panels shown on screen.

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::models::{AiSuggestion, Analytics, Platform, Post, PostStatus, SocialAccount};
use crate::query::keys;
use crate::traits::HttpClient;

use super::ai_assistant::unused_suggestions;
use super::connect_platforms::ConnectPlatforms;
use super::stats_card::StatsCard;

/// Recent-posts panel length.
pub const RECENT_POSTS_LIMIT: usize = 5;

/// Raw query results the dashboard is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub analytics: Analytics,
    pub platforms: Vec<Platform>,
    pub accounts: Vec<SocialAccount>,
    pub posts: Vec<Post>,
    pub suggestions: Vec<AiSuggestion>,
}

/// One row of the platform performance table.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRow {
    pub name: String,
    pub followers: u64,
    pub engagement: f64,
    pub posts: u64,
}

/// Everything the dashboard renders, derived from [`DashboardData`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub cards: Vec<StatsCard>,
    pub top_platform: Option<String>,
    pub platform_rows: Vec<PlatformRow>,
    pub recent_posts: Vec<Post>,
    pub suggestions: Vec<AiSuggestion>,
    pub calendar: Vec<Post>,
    pub connect: ConnectPlatforms,
}

impl DashboardView {
    pub fn from_data(data: &DashboardData) -> Self {
        let analytics = &data.analytics;
        Self {
            cards: stat_cards(analytics),
            top_platform: analytics.top_platform.clone(),
            platform_rows: platform_rows(analytics, &data.platforms),
            recent_posts: recent_posts(&data.posts, RECENT_POSTS_LIMIT),
            suggestions: unused_suggestions(&data.suggestions),
            calendar: scheduled_posts(&data.posts),
            connect: ConnectPlatforms::new(&data.platforms, &data.accounts),
        }
    }
}

/// Loader for the dashboard queries.
pub struct Dashboard;

impl Dashboard {
    /// Read every dashboard query through the cache.
    ///
    /// Reads run concurrently; the first failure is returned.
    pub async fn load<C: HttpClient>(ctx: &AppContext<C>) -> ApiResult<DashboardData> {
        let (analytics, platforms, accounts, posts, suggestions) = futures::try_join!(
            ctx.queries.read(keys::ANALYTICS, || ctx.api.get_analytics()),
            ctx.queries.read(keys::PLATFORMS, || ctx.api.list_platforms()),
            ctx.queries.read(keys::ACCOUNTS, || ctx.api.list_accounts()),
            ctx.queries.read(keys::POSTS, || ctx.api.list_posts()),
            ctx.queries.read(keys::SUGGESTIONS, || ctx.api.list_suggestions()),
        )?;

        Ok(DashboardData {
            analytics,
            platforms,
            accounts,
            posts,
            suggestions,
        })
    }

    /// Drop every cached dashboard query, then load again.
    pub async fn refresh<C: HttpClient>(ctx: &AppContext<C>) -> ApiResult<DashboardData> {
        ctx.queries.invalidate(&keys::DASHBOARD);
        Self::load(ctx).await
    }
}

// ============================================================================
// Derivations
// ============================================================================

fn stat_cards(analytics: &Analytics) -> Vec<StatsCard> {
    let published = analytics.published_posts;
    let scheduled = analytics.scheduled_posts;
    let this_month = published.div_ceil(4);
    let next_week = scheduled.div_ceil(2).min(scheduled);

    vec![
        StatsCard::new("Total Followers", format_count(analytics.total_followers))
            .with_trend(analytics.reach_growth),
        StatsCard::new("Engagement Rate", format!("{:.1}%", analytics.engagement_rate)),
        StatsCard::new("Published Posts", published.to_string())
            .with_sub_value(format!("+{} this month", this_month)),
        StatsCard::new("Scheduled Posts", scheduled.to_string())
            .with_sub_value(format!("{} in next 7 days", next_week)),
    ]
}

fn platform_rows(analytics: &Analytics, platforms: &[Platform]) -> Vec<PlatformRow> {
    analytics
        .platform_stats
        .iter()
        .map(|stat| {
            let name = stat
                .name
                .clone()
                .or_else(|| {
                    platforms
                        .iter()
                        .find(|p| p.id == stat.platform_id)
                        .map(|p| p.name.clone())
                })
                .unwrap_or_else(|| format!("Platform {}", stat.platform_id));
            PlatformRow {
                name,
                followers: stat.followers,
                engagement: stat.engagement,
                posts: stat.posts,
            }
        })
        .collect()
}

/// Newest first by creation time, then by id.
fn recent_posts(posts: &[Post], limit: usize) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    sorted.truncate(limit);
    sorted
}

/// Scheduled posts with a publish time, soonest first.
fn scheduled_posts(posts: &[Post]) -> Vec<Post> {
    let mut scheduled: Vec<Post> = posts
        .iter()
        .filter(|p| p.status == PostStatus::Scheduled && p.scheduled_at.is_some())
        .cloned()
        .collect();
    scheduled.sort_by_key(|p| p.scheduled_at);
    scheduled
}

/// `1234567` -> `1,234,567`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlatformStat;
    use chrono::{TimeZone, Utc};

    fn post(id: i64, status: PostStatus, created_day: u32, scheduled_day: Option<u32>) -> Post {
        Post {
            id,
            user_id: 1,
            content: format!("post {}", id),
            status,
            media_urls: vec![],
            scheduled_at: scheduled_day.map(|d| Utc.with_ymd_and_hms(2026, 11, d, 9, 0, 0).unwrap()),
            published_at: None,
            created_at: Some(Utc.with_ymd_and_hms(2026, 10, created_day, 12, 0, 0).unwrap()),
            platforms: vec![1],
        }
    }

    #[test]
    fn test_stat_cards_derivations() {
        let analytics = Analytics {
            total_followers: 12_480,
            engagement_rate: 4.27,
            reach_growth: -2.0,
            published_posts: 9,
            scheduled_posts: 5,
            ..Default::default()
        };
        let cards = stat_cards(&analytics);

        assert_eq!(cards[0].value, "12,480");
        assert!(!cards[0].trend.unwrap().is_up());
        assert_eq!(cards[1].value, "4.3%");
        assert_eq!(cards[2].sub_value.as_deref(), Some("+3 this month"));
        assert_eq!(cards[3].sub_value.as_deref(), Some("3 in next 7 days"));
    }

    #[test]
    fn test_stat_cards_zero_counts() {
        let cards = stat_cards(&Analytics::default());
        assert_eq!(cards[2].sub_value.as_deref(), Some("+0 this month"));
        assert_eq!(cards[3].sub_value.as_deref(), Some("0 in next 7 days"));
        assert!(cards[0].trend.unwrap().is_up());
    }

    #[test]
    fn test_platform_rows_join_names() {
        let analytics = Analytics {
            platform_stats: vec![
                PlatformStat { platform_id: 1, name: None, followers: 10, engagement: 1.5, posts: 2 },
                PlatformStat { platform_id: 9, name: None, followers: 0, engagement: 0.0, posts: 0 },
                PlatformStat { platform_id: 2, name: Some("IG".to_string()), followers: 5, engagement: 0.0, posts: 1 },
            ],
            ..Default::default()
        };
        let platforms = vec![Platform {
            id: 1,
            name: "Twitter".to_string(),
            slug: "twitter".to_string(),
            icon_url: None,
            color: None,
            active: true,
        }];

        let names: Vec<String> = platform_rows(&analytics, &platforms).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Twitter", "Platform 9", "IG"]);
    }

    #[test]
    fn test_recent_posts_newest_five() {
        let posts: Vec<Post> = (1..=7).map(|d| post(d as i64, PostStatus::Draft, d, None)).collect();
        let ids: Vec<i64> = recent_posts(&posts, RECENT_POSTS_LIMIT).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_calendar_orders_scheduled_posts() {
        let posts = vec![
            post(1, PostStatus::Scheduled, 1, Some(20)),
            post(2, PostStatus::Draft, 2, Some(3)),
            post(3, PostStatus::Scheduled, 3, Some(4)),
            post(4, PostStatus::Scheduled, 4, None),
        ];
        let ids: Vec<i64> = scheduled_posts(&posts).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
