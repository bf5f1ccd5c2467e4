//! Tracing Setup
//!
//! Installs a `tracing_subscriber::fmt` subscriber for the binary.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; when set it wins over the configured level
//! - `observability.logging.level`: fallback filter
//! - `observability.logging.format`: `json` or `pretty`
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_ticket::telemetry::init_tracing;
//!
//! let config = order_ticket::config::load_config(None)?;
//! init_tracing(&config.observability.logging)?;
//! ```

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::config::LoggingConfig;

/// Build the event filter: `RUST_LOG` if set and parseable, else the configured level.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(config.level.trim()).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let json = config.is_json();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(json.then(|| fmt::layer().json().with_current_span(true)))
        .with((!json).then(|| fmt::layer().with_target(true)))
        .try_init()
}
