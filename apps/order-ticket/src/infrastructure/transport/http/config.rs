//! HTTP transport configuration.

use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the brokerage EMS HTTP transport.
#[derive(Clone)]
pub struct HttpTransportConfig {
    /// API base URL, e.g. `https://ems.example.com/api/v2`.
    pub base_url: String,
    /// Partner API key.
    pub api_key: String,
    /// Session token of the linked broker login.
    pub session_token: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl HttpTransportConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            session_token: session_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl std::fmt::Debug for HttpTransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransportConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}
