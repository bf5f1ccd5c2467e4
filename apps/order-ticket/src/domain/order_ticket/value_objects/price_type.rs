//! Order price type (market, limit, stop market, stop limit).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Price type specifying execution behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    /// Market order - execute at best available price.
    #[default]
    Market,
    /// Limit order - execute at specified price or better.
    Limit,
    /// Stop order - becomes market order when stop price is reached.
    StopMarket,
    /// Stop-limit order - becomes limit order when stop price is reached.
    StopLimit,
}

impl PriceType {
    /// All price types in ticket display order.
    pub const ALL: [Self; 4] = [Self::Market, Self::Limit, Self::StopMarket, Self::StopLimit];

    /// Returns true if this price type carries a limit price.
    #[must_use]
    pub const fn uses_limit_price(&self) -> bool {
        matches!(self, Self::Limit | Self::StopLimit)
    }

    /// Returns true if this price type carries a stop price.
    #[must_use]
    pub const fn uses_stop_price(&self) -> bool {
        matches!(self, Self::StopMarket | Self::StopLimit)
    }

    /// Returns true if this is a market order (immediate execution).
    #[must_use]
    pub const fn is_market(&self) -> bool {
        matches!(self, Self::Market)
    }

    /// Wire name used by the broker API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopMarket => "STOP_MARKET",
            Self::StopLimit => "STOP_LIMIT",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Limit => "Limit",
            Self::StopMarket => "Stop Market",
            Self::StopLimit => "Stop Limit",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|price_type| price_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::invalid("price_type", format!("Unknown price type: {s}")))
    }
}
