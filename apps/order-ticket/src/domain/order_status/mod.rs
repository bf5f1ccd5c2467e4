//! Order Status Bounded Context
//!
//! Classifies broker-reported orders, including group orders made of
//! several legs, into order list sections and decides cancellability.
//! Classification never fails: unknown statuses map to a sentinel.

pub mod record;
pub mod services;
pub mod value_objects;

pub use record::OrderStatusRecord;
pub use services::{AggregationRule, OrderStatusClassifier, StatusSummary};
pub use value_objects::{OrderStatus, StatusCategory, StatusOrderType};
