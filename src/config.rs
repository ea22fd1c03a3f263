//! API configuration.
//!
//! Connection settings shared by every resource client. Use the builder
//! pattern to customize.

use std::time::Duration;

/// Default backend URL (the on-premises dashboard API).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for resource clients.
///
/// # Example
///
/// ```ignore
/// use seamline::config::ApiConfig;
///
/// let config = ApiConfig::default()
///     .with_base_url("https://ops.example.com/api")
///     .with_timeout_secs(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to (no trailing slash).
    pub base_url: String,
    /// Request timeout, applied when this config builds the HTTP client.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
