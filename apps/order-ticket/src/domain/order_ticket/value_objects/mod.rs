//! Order Ticket Value Objects
//!
//! Immutable types selected on the order ticket.

mod expiration;
mod order_action;
mod price_type;

pub use expiration::Expiration;
pub use order_action::OrderAction;
pub use price_type::PriceType;
