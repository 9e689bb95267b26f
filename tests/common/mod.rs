//! Common fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::*;
//!
//! let http = MockHttpConfig::new()
//!     .with_json("GET", "/api/platforms", 200, json!([platform_json(1, "Twitter")]))
//!     .build();
//! let ctx = test_context(http);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use serde_json::{json, Value};
use socialdash::config::Config;
use socialdash::context::AppContext;

/// Base URL every mock context points at.
pub const BASE: &str = "http://backend.test";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn test_config() -> Config {
    Config::default()
        .with_api_url(BASE)
        .with_user_id(1)
        .with_brand_name("YourBrand")
}

pub fn test_context(http: MockHttpClient) -> AppContext<MockHttpClient> {
    AppContext::new(&test_config(), http)
}

pub fn platform_json(id: i64, name: &str) -> Value {
    json!({"id": id, "name": name, "slug": name.to_lowercase(), "active": true})
}

pub fn account_json(id: i64, platform_id: i64) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "platformId": platform_id,
        "accountName": "YourBrand",
        "accountId": format!("yourbrand_{}_1", platform_id),
        "connected": true
    })
}

pub fn suggestion_json(id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "title": format!("Suggestion {}", id),
        "content": content,
        "type": "content",
        "used": false
    })
}

pub fn post_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "content": "Fresh coffee, fresh week",
        "status": status,
        "platforms": [1, 2]
    })
}

pub fn analytics_json() -> Value {
    json!({
        "totalFollowers": 15230,
        "engagementRate": 4.8,
        "reachGrowth": 12.5,
        "topPlatform": "Instagram",
        "publishedPosts": 10,
        "scheduledPosts": 4,
        "platformStats": [
            {"platformId": 2, "followers": 9000, "engagement": 5.1, "posts": 6}
        ]
    })
}

/// Responses for every dashboard query: six platforms, two of them connected.
pub fn dashboard_http() -> MockHttpClient {
    MockHttpConfig::new()
        .with_json("GET", "/api/analytics", 200, analytics_json())
        .with_json(
            "GET",
            "/api/platforms",
            200,
            json!([
                platform_json(1, "Twitter"),
                platform_json(2, "Instagram"),
                platform_json(3, "LinkedIn"),
                platform_json(4, "Facebook"),
                platform_json(5, "TikTok"),
                platform_json(6, "YouTube")
            ]),
        )
        .with_json("GET", "/api/accounts", 200, json!([account_json(10, 2), account_json(11, 5)]))
        .with_json("GET", "/api/posts", 200, json!([post_json(1, "published"), post_json(2, "draft")]))
        .with_json(
            "GET",
            "/api/ai-suggestions",
            200,
            json!([suggestion_json(7, "Try our autumn blend")]),
        )
        .build()
}
