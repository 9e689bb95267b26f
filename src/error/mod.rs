//! Error handling for socialdash.
//!
//! - [`ApiError`]: every failure an API client method can return
//! - [`ErrorCategory`]: coarse classification used for messaging
//! - [`ApiResult`]: result alias used across the crate
//!
//! Propagation policy: API methods log and return a normalized [`ApiError`];
//! components turn it into a toast. Nothing retries automatically.

mod api_error;
mod category;

pub use api_error::{ApiError, QUOTA_MESSAGE};
pub use category::ErrorCategory;

/// Type alias for Results using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
