//! Error category classification.
//!
//! A high-level categorization of API failures so the UI can pick a message
//! and decide whether suggesting "try again" makes sense.

use std::fmt;

/// Where a failure came from, as far as the dashboard cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures (connection refused, DNS, timeout).
    Network,

    /// Quota or rate limit exhausted (HTTP 429).
    RateLimit,

    /// Backend errors (HTTP 5xx).
    Server,

    /// Requests the backend rejected or responses we could not decode.
    Client,

    /// Missing credential or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    ///
    /// Nothing retries automatically; this only drives the wording shown
    /// to the user.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::RateLimit
        )
    }

    /// Label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// What the user can do about it, printed after a failed command.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::RateLimit => "Wait a while before generating more content",
            ErrorCategory::Server => "The backend is having trouble; refresh in a moment",
            ErrorCategory::Client => "Please check your input and try again",
            ErrorCategory::Configuration => "Check your environment configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
