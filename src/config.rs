//! Client configuration
//!
//! `ClientConfig` carries everything about how the client talks to the API
//! except the credentials: base URL, timeouts, the fixed waits used for
//! rate limiting and pagination, and the header set that identifies the
//! calling web client.

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use std::collections::HashMap;
use std::time::Duration;

/// Production API origin
pub const DEFAULT_BASE_URL: &str = "https://api.codementor.io/api/v2";

/// Wait before retrying a request answered with HTTP 429
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Pause between successive pages of a paginated listing
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "CODEMENTOR_BASE_URL";

/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_ENV: &str = "CODEMENTOR_TIMEOUT_SECS";

/// Header set of the first-party web client
pub fn web_client_headers() -> HashMap<String, String> {
    [
        ("Accept", "application/json"),
        ("Origin", "https://www.codementor.io"),
        ("Referer", "https://www.codementor.io/"),
        ("X-Requested-From", "cm-web"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Fixed wait before retrying a rate-limited request
    pub rate_limit_wait: Duration,
    /// Fixed pause between pages while paginating
    pub page_delay: Duration,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit_wait: DEFAULT_RATE_LIMIT_WAIT,
            page_delay: DEFAULT_PAGE_DELAY,
            default_headers: web_client_headers(),
            user_agent: format!("codementor-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults overridden by `CODEMENTOR_BASE_URL` / `CODEMENTOR_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the override keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV).none_if_empty() {
            config.base_url = base_url;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).none_if_empty() {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                Error::invalid_value(TIMEOUT_ENV, format!("expected whole seconds, got '{raw}'"))
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the wait used when rate limited
    pub fn rate_limit_wait(mut self, wait: Duration) -> Self {
        self.config.rate_limit_wait = wait;
        self
    }

    /// Set the pause between pages
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.config.page_delay = delay;
        self
    }

    /// Add or replace a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
