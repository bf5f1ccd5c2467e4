//! Status categories used to group orders in an order list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::OrderStatus;

/// A named set of order statuses.
///
/// The first four are display categories; a single order belongs to
/// exactly one of them. `Cancellable` overlaps the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCategory {
    /// Pending, open or pending cancel.
    Open,
    /// Part filled.
    PartiallyFilled,
    /// Filled.
    Filled,
    /// Canceled, rejected, not found, expired or unknown.
    Other,
    /// Orders the user may still cancel.
    Cancellable,
}

impl StatusCategory {
    /// Display categories in order list order.
    pub const DISPLAY: [Self; 4] = [Self::Open, Self::PartiallyFilled, Self::Filled, Self::Other];

    /// Statuses in this category.
    #[must_use]
    pub const fn statuses(&self) -> &'static [OrderStatus] {
        match self {
            Self::Open => &[
                OrderStatus::Pending,
                OrderStatus::Open,
                OrderStatus::PendingCancel,
            ],
            Self::PartiallyFilled => &[OrderStatus::PartFilled],
            Self::Filled => &[OrderStatus::Filled],
            Self::Other => &[
                OrderStatus::Canceled,
                OrderStatus::Rejected,
                OrderStatus::NotFound,
                OrderStatus::Expired,
                OrderStatus::Unknown,
            ],
            Self::Cancellable => &[
                OrderStatus::Pending,
                OrderStatus::Open,
                OrderStatus::PendingCancel,
                OrderStatus::PartFilled,
                OrderStatus::Unknown,
            ],
        }
    }

    /// Returns true if `status` is in this category.
    #[must_use]
    pub fn contains(&self, status: OrderStatus) -> bool {
        self.statuses().contains(&status)
    }

    /// Label shown as the order list section header.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open Orders",
            Self::PartiallyFilled => "Partially Filled Orders",
            Self::Filled => "Filled Orders",
            Self::Other => "Other Orders",
            Self::Cancellable => "Cancellable Orders",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            Self::Filled => write!(f, "FILLED"),
            Self::Other => write!(f, "OTHER"),
            Self::Cancellable => write!(f, "CANCELLABLE"),
        }
    }
}
