//! Runtime configuration and the identity of the signed-in user.
//!
//! Everything comes from environment variables; there is no config file.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SOCIALDASH_API_URL` | `http://localhost:5000` |
//! | `SOCIALDASH_INFERENCE_URL` | `https://api-inference.huggingface.co` |
//! | `HUGGINGFACE_API_KEY` | unset |
//! | `SOCIALDASH_USER_ID` | `1` |
//! | `SOCIALDASH_BRAND` | `YourBrand` |
//! | `SOCIALDASH_STALE_SECS` | unset (fresh until invalidated) |

use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_BRAND: &str = "YourBrand";

/// Application configuration.
///
/// # Example
///
/// ```
/// use socialdash::config::Config;
///
/// let config = Config::default()
///     .with_api_url("http://localhost:8080")
///     .with_user_id(42);
/// assert_eq!(config.session().user_id, 42);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Hosted inference base URL, without trailing slash
    pub inference_url: String,
    /// Bearer credential for the hosted inference endpoint
    pub inference_api_key: Option<String>,
    pub user_id: i64,
    /// Display name used when connecting new accounts
    pub brand_name: String,
    /// Age after which cached queries are refetched; `None` keeps them until invalidated
    pub stale_time: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            inference_api_key: None,
            user_id: 1,
            brand_name: DEFAULT_BRAND.to_string(),
            stale_time: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = trim_url(url.into());
        self
    }

    pub fn with_inference_url(mut self, url: impl Into<String>) -> Self {
        self.inference_url = trim_url(url.into());
        self
    }

    pub fn with_inference_api_key(mut self, key: impl Into<String>) -> Self {
        self.inference_api_key = Some(key.into());
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_brand_name(mut self, brand: impl Into<String>) -> Self {
        self.brand_name = brand.into();
        self
    }

    pub fn with_stale_time(mut self, stale_time: Option<Duration>) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Build configuration from environment variables.
    ///
    /// Unset variables fall back to defaults; malformed numbers are an error.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Some(url) = env_var("SOCIALDASH_API_URL") {
            config = config.with_api_url(url);
        }
        if let Some(url) = env_var("SOCIALDASH_INFERENCE_URL") {
            config = config.with_inference_url(url);
        }
        if let Some(key) = env_var("HUGGINGFACE_API_KEY") {
            config = config.with_inference_api_key(key);
        }
        if let Some(raw) = env_var("SOCIALDASH_USER_ID") {
            let user_id = raw
                .parse()
                .map_err(|_| ApiError::Config(format!("SOCIALDASH_USER_ID is not a number: {}", raw)))?;
            config = config.with_user_id(user_id);
        }
        if let Some(brand) = env_var("SOCIALDASH_BRAND") {
            config = config.with_brand_name(brand);
        }
        if let Some(raw) = env_var("SOCIALDASH_STALE_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                ApiError::Config(format!("SOCIALDASH_STALE_SECS is not a number: {}", raw))
            })?;
            config = config.with_stale_time(Some(Duration::from_secs(secs)));
        }

        Ok(config)
    }

    /// The identity requests are made on behalf of.
    pub fn session(&self) -> Session {
        Session {
            user_id: self.user_id,
            brand_name: self.brand_name.clone(),
        }
    }
}

/// Empty values count as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Identity of the dashboard user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub brand_name: String,
}

impl Session {
    pub fn new(user_id: i64, brand_name: impl Into<String>) -> Self {
        Self {
            user_id,
            brand_name: brand_name.into(),
        }
    }

    /// Account identifier used when connecting this user to a platform.
    pub fn account_id_for(&self, platform_slug: &str) -> String {
        format!("{}_{}_{}", slugify(&self.brand_name), platform_slug, self.user_id)
    }
}

fn slugify(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "SOCIALDASH_API_URL",
        "SOCIALDASH_INFERENCE_URL",
        "HUGGINGFACE_API_KEY",
        "SOCIALDASH_USER_ID",
        "SOCIALDASH_BRAND",
        "SOCIALDASH_STALE_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session(), Session::new(1, "YourBrand"));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SOCIALDASH_API_URL", "http://api.test/");
        std::env::set_var("HUGGINGFACE_API_KEY", "hf_secret");
        std::env::set_var("SOCIALDASH_USER_ID", "17");
        std::env::set_var("SOCIALDASH_BRAND", "Acme Co");
        std::env::set_var("SOCIALDASH_STALE_SECS", "30");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.api_url, "http://api.test");
        assert_eq!(config.inference_api_key.as_deref(), Some("hf_secret"));
        assert_eq!(config.user_id, 17);
        assert_eq!(config.brand_name, "Acme Co");
        assert_eq!(config.stale_time, Some(Duration::from_secs(30)));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_user_id() {
        clear_env();
        std::env::set_var("SOCIALDASH_USER_ID", "abc");
        let result = Config::from_env();
        clear_env();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_empty_key_is_unset() {
        clear_env();
        std::env::set_var("HUGGINGFACE_API_KEY", "  ");
        let config = Config::from_env().unwrap();
        clear_env();
        assert!(config.inference_api_key.is_none());
    }

    #[test]
    fn test_account_id_for() {
        let session = Session::new(3, "Acme Co!");
        assert_eq!(session.account_id_for("twitter"), "acmeco_twitter_3");
    }
}
