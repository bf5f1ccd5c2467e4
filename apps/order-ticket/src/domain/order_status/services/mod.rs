//! Order Status Domain Services
//!
//! Stateless classification of reported orders.

mod aggregation;
mod classifier;

pub use aggregation::AggregationRule;
pub use classifier::{OrderStatusClassifier, StatusSummary};
