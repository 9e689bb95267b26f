//! Results sent back to the event loop from background tasks.

use crate::components::{DashboardData, Toast};
use crate::error::ApiError;

#[derive(Debug)]
pub enum AppMessage {
    /// A dashboard load finished
    DashboardLoaded(Result<DashboardData, ApiError>),
    /// A user action (connect, draft) finished; the dashboard should reload
    ActionFinished(Toast),
}
