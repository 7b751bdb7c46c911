//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the generator base URL
pub const BASE_URL_ENV: &str = "DEALIQ_BASE_URL";
/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "DEALIQ_TIMEOUT_SECS";

/// Default generator base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Memo generation endpoint, relative to the base URL
pub const MEMO_PATH: &str = "/api/generate_memo";

/// Memo client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Generator base URL, without the endpoint path
    pub base_url: String,
    /// Whole-request timeout in seconds (generation is slow)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `DEALIQ_BASE_URL` / `DEALIQ_TIMEOUT_SECS`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the known keys
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout_secs(secs),
                _ => tracing::warn!(value = %raw, "ignoring invalid {TIMEOUT_ENV}"),
            }
        }
        config
    }

    /// With base URL (trailing slashes dropped)
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into().trim().to_string();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// With timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// With User-Agent
    #[inline]
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Full URL of the memo endpoint
    #[must_use]
    pub fn memo_url(&self) -> String {
        format!("{}{MEMO_PATH}", self.base_url)
    }

    /// Timeout as a duration
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 120,
            user_agent: format!("dealiq/{}", crate::VERSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.memo_url(), "http://localhost:8000/api/generate_memo");
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert!(config.user_agent.starts_with("dealiq/"));
    }

    #[test]
    fn base_url_trailing_slashes_dropped() {
        let config = ClientConfig::new().with_base_url("https://memo.example.com//");
        assert_eq!(config.memo_url(), "https://memo.example.com/api/generate_memo");
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://10.0.0.5:9000/"),
            (TIMEOUT_ENV, "30"),
        ]));
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "  "), (TIMEOUT_ENV, "soon")]));
        assert_eq!(config, ClientConfig::default());

        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")]));
        assert_eq!(config.timeout_secs, 120);
    }
}
