//! Order Aggregate
//!
//! The Order is the mutable draft behind an order ticket. Equity and FX
//! tickets share the common fields and differ in a tagged payload.

mod equity;
mod fx;
mod order;

pub use equity::EquityTicket;
pub use fx::FxTicket;
pub use order::{Order, OrderKind};
