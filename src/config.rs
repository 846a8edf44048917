//! Runtime configuration.
//!
//! Everything here has a fixed default; the only environment override is the
//! endpoint URL, which makes it possible to point the client at a local
//! backend.
//!
//! # Example
//!
//! ```
//! use headlines::config::FeedConfig;
//! use std::time::Duration;
//!
//! let config = FeedConfig::default()
//!     .with_base_url("http://localhost:8000/api/news")
//!     .with_quiet_period(Duration::from_millis(250));
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use crate::error::ConfigError;

/// Default search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://news-web-backend.onrender.com/api/news";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "HEADLINES_API_URL";

/// Quiet period before a typed query is considered settled.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Number of articles requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on a single request, after which it counts as a network failure.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Search endpoint, queried with `GET` and query parameters
    pub base_url: String,
    /// Debounce quiet period for typed input
    pub quiet_period: Duration,
    /// Articles per page (`pageSize` parameter)
    pub page_size: u32,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            quiet_period: DEFAULT_QUIET_PERIOD,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Defaults, with the endpoint taken from `HEADLINES_API_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Check the values that would otherwise only fail at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(self.base_url.clone()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
