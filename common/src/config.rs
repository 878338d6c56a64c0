use std::env;
use std::time::Duration;

use anyhow::Context;
use dotenv::dotenv;
use tracing::debug;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    // Backend
    pub api_base_url: String,
    pub request_timeout: Duration,

    // Signed-in session, if any
    pub auth_token: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            auth_token: None,
            user_email: None,
            user_name: None,
        }
    }
}

impl PortalConfig {
    /// Reads the configuration from the process environment, loading `.env` first.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        debug!(api_base_url = %config.api_base_url, timeout = ?config.request_timeout, "configuration loaded");
        Ok(config)
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = non_empty("PORTAL_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let request_timeout = match non_empty("PORTAL_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse::<u64>().with_context(|| {
                format!("PORTAL_REQUEST_TIMEOUT_SECS must be a number of seconds, got {raw:?}")
            })?),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(PortalConfig {
            api_base_url,
            request_timeout,
            auth_token: non_empty("PORTAL_AUTH_TOKEN"),
            user_email: non_empty("PORTAL_USER_EMAIL"),
            user_name: non_empty("PORTAL_USER_NAME"),
        })
    }

    /// Joins an absolute API path onto the base url.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
