//! Infrastructure Layer
//!
//! Adapters implementing the application ports.

pub mod transport;

pub use transport::{EmsError, HttpTradeTransport, HttpTransportConfig, InMemoryTradeTransport};
