//! View models for the dashboard screens.
//!
//! Components hold the logic the screen performs (filtering, derived values,
//! visibility rules) and run user actions as cache mutations. Rendering lives
//! in `crate::ui`.

pub mod ai_assistant;
pub mod connect_platforms;
pub mod dashboard;
pub mod scroll_to_top;
pub mod stats_card;
pub mod toast;

pub use connect_platforms::{available_platforms, ConnectPlatforms, MAX_AVAILABLE_PLATFORMS};
pub use dashboard::{Dashboard, DashboardData, DashboardView, PlatformRow};
pub use scroll_to_top::{ScrollCommand, ScrollToTop, SCROLL_THRESHOLD};
pub use stats_card::{StatsCard, Trend};
pub use toast::{Toast, ToastKind};
