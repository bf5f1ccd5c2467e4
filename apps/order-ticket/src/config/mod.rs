//! Configuration module for the order ticket.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_ticket::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("broker: {}", config.broker.base_url);
//! ```

mod broker;
mod defaults;
mod observability;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use broker::BrokerConfig;
pub use defaults::TicketDefaultsConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Brokerage API configuration.
    #[serde(default)]
    pub broker: BrokerConfig,
    /// Initial ticket selections.
    #[serde(default)]
    pub defaults: TicketDefaultsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset variables
/// without a default become empty.
#[allow(clippy::expect_used)] // Regex is compile-time constant
pub fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(value)) if !value.is_empty() => value,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` naming the first bad setting.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let broker = &config.broker;

    if broker.is_configured()
        && !(broker.base_url.starts_with("https://") || broker.base_url.starts_with("http://"))
    {
        return Err(ConfigError::ValidationError(
            "broker.base_url must start with http:// or https://".to_string(),
        ));
    }

    if broker.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "broker.timeout_secs must be positive".to_string(),
        ));
    }

    let logging = &config.observability.logging;
    if logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    if !LoggingConfig::FORMATS
        .iter()
        .any(|format| format.eq_ignore_ascii_case(&logging.format))
    {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {:?}",
            LoggingConfig::FORMATS
        )));
    }

    Ok(())
}
