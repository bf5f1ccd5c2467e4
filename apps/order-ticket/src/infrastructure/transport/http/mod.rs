//! Brokerage EMS HTTP Transport
//!
//! Implementation of `TradeTransportPort` over the EMS JSON API:
//! - Equity and FX preview and place endpoints
//! - Error code mapping to `TransportError`
//! - No automatic retry

mod adapter;
mod api_types;
mod client;
mod config;
mod error;

pub use adapter::HttpTradeTransport;
pub use config::{DEFAULT_TIMEOUT, HttpTransportConfig};
pub use error::EmsError;
