//! Broker-reported order status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as reported by the broker's order status endpoint.
///
/// Parsing is total: anything unrecognized becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "Option<String>")]
pub enum OrderStatus {
    /// Accepted by the broker, not yet working.
    Pending,
    /// Working at the exchange.
    Open,
    /// Completely filled.
    Filled,
    /// Some quantity filled, remainder working.
    PartFilled,
    /// Canceled.
    Canceled,
    /// Rejected by the broker or exchange.
    Rejected,
    /// The broker has no record of the order.
    NotFound,
    /// Cancel requested, awaiting confirmation.
    PendingCancel,
    /// Expired (e.g. day order after the close).
    Expired,
    /// Missing or unrecognized status.
    #[default]
    Unknown,
}

impl OrderStatus {
    /// All statuses, `Unknown` last.
    pub const ALL: [Self; 10] = [
        Self::Pending,
        Self::Open,
        Self::Filled,
        Self::PartFilled,
        Self::Canceled,
        Self::Rejected,
        Self::NotFound,
        Self::PendingCancel,
        Self::Expired,
        Self::Unknown,
    ];

    /// Parse a raw status string. Never fails.
    ///
    /// Only the exact wire name matches; anything else is `Unknown`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == raw)
            .unwrap_or(Self::Unknown)
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Open => "OPEN",
            Self::Filled => "FILLED",
            Self::PartFilled => "PART_FILLED",
            Self::Canceled => "CANCELED",
            Self::Rejected => "REJECTED",
            Self::NotFound => "NOT_FOUND",
            Self::PendingCancel => "PENDING_CANCEL",
            Self::Expired => "EXPIRED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<Option<String>> for OrderStatus {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map_or(Self::Unknown, Self::from_raw)
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
