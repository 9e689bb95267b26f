//! Cache keys for server data.
//!
//! Keys mirror the backend path the data is read from.

pub const PLATFORMS: &str = "/api/platforms";
pub const ACCOUNTS: &str = "/api/accounts";
pub const ANALYTICS: &str = "/api/analytics";
pub const POSTS: &str = "/api/posts";
pub const SUGGESTIONS: &str = "/api/ai-suggestions";

/// Keys that change when an account is connected.
pub const AFTER_CONNECT: [&str; 2] = [ACCOUNTS, ANALYTICS];

/// Keys that change when a post is created from a suggestion.
pub const AFTER_POST_CREATED: [&str; 3] = [POSTS, SUGGESTIONS, ANALYTICS];

/// Every key the dashboard reads.
pub const DASHBOARD: [&str; 5] = [PLATFORMS, ACCOUNTS, ANALYTICS, POSTS, SUGGESTIONS];
