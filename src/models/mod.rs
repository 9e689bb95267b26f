//! Shared data contracts between the backend API and the dashboard.
//!
//! All types serialize with the backend's camelCase field names.

pub mod analytics;
pub mod platform;
pub mod post;
pub mod suggestion;
pub mod translation;
pub mod virtual_world;

pub use analytics::{Analytics, EngagementPoint, PlatformStat};
pub use platform::{ConnectAccountRequest, Platform, SocialAccount};
pub use post::{CreatePostRequest, Post, PostPlatform, PostStatus};
pub use suggestion::{AiSuggestion, GenerateContentRequest, SuggestionMetadata};
pub use translation::{
    BatchTranslateRequest, BatchTranslateResponse, DetectLanguageRequest, DetectLanguageResponse,
    TranslateRequest, TranslateResponse,
};
pub use virtual_world::{VirtualWorld, VirtualWorldAccount, VirtualWorldMessage, VirtualWorldPost};
