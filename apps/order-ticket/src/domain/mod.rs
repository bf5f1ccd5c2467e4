//! Domain Layer
//!
//! Business logic with no infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`order_ticket`]: Equity and FX order drafts, requirements and validation
//! - [`order_status`]: Order status classification, including group orders

pub mod order_status;
pub mod order_ticket;
pub mod shared;
