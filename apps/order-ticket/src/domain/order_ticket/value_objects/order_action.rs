//! Order action (buy, sell, short, cover).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Side of the trade as presented on the order ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
    /// Buy to open or add.
    #[default]
    Buy,
    /// Sell a long position.
    Sell,
    /// Open a short position.
    SellShort,
    /// Close a short position.
    BuyToCover,
}

impl OrderAction {
    /// All actions in ticket display order.
    pub const ALL: [Self; 4] = [Self::Buy, Self::Sell, Self::SellShort, Self::BuyToCover];

    /// Wire name used by the broker API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::SellShort => "SELL_SHORT",
            Self::BuyToCover => "BUY_TO_COVER",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::SellShort => "Sell Short",
            Self::BuyToCover => "Buy to Cover",
        }
    }

    /// Returns true if the action spends cash (buy side).
    #[must_use]
    pub const fn is_buy_side(&self) -> bool {
        matches!(self, Self::Buy | Self::BuyToCover)
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::invalid("action", format!("Unknown order action: {s}")))
    }
}
