//! Trade Transports
//!
//! Implementations of `TradeTransportPort`.

pub mod http;
pub mod in_memory;

pub use http::{EmsError, HttpTradeTransport, HttpTransportConfig};
pub use in_memory::InMemoryTradeTransport;
