//! Broker API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::infrastructure::transport::HttpTransportConfig;

/// Brokerage EMS API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// API base URL. Empty means no HTTP transport is configured.
    #[serde(default)]
    pub base_url: String,
    /// Partner API key.
    #[serde(default)]
    pub api_key: String,
    /// Session token of the linked broker login.
    #[serde(default)]
    pub session_token: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BrokerConfig {
    /// Returns true if a base URL is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Settings for the HTTP transport.
    #[must_use]
    pub fn to_transport_config(&self) -> HttpTransportConfig {
        HttpTransportConfig::new(
            self.base_url.clone(),
            self.api_key.clone(),
            self.session_token.clone(),
        )
        .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            session_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for BrokerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

const fn default_timeout_secs() -> u64 {
    30
}
