//! Order type reported alongside an order status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument or structure of a reported order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "Option<String>")]
pub enum StatusOrderType {
    /// Single-leg option.
    Option,
    /// Stock or ETF.
    EquityOrEtf,
    /// Covered call (stock plus short call).
    BuyWrites,
    /// Option spread.
    Spreads,
    /// Stock and option combination.
    Combo,
    /// Generic multi-leg order.
    #[serde(rename = "MULTILEG")]
    MultiLeg,
    /// Mutual fund.
    MutualFunds,
    /// Bond or other fixed income.
    FixedIncome,
    /// Cash movement.
    Cash,
    /// Foreign exchange.
    Fx,
    /// Missing or unrecognized type.
    #[default]
    Unknown,
}

impl StatusOrderType {
    /// All order types, `Unknown` last.
    pub const ALL: [Self; 11] = [
        Self::Option,
        Self::EquityOrEtf,
        Self::BuyWrites,
        Self::Spreads,
        Self::Combo,
        Self::MultiLeg,
        Self::MutualFunds,
        Self::FixedIncome,
        Self::Cash,
        Self::Fx,
        Self::Unknown,
    ];

    /// Parse a raw order type string. Never fails.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|order_type| order_type.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or(Self::Unknown)
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Option => "OPTION",
            Self::EquityOrEtf => "EQUITY_OR_ETF",
            Self::BuyWrites => "BUY_WRITES",
            Self::Spreads => "SPREADS",
            Self::Combo => "COMBO",
            Self::MultiLeg => "MULTILEG",
            Self::MutualFunds => "MUTUAL_FUNDS",
            Self::FixedIncome => "FIXED_INCOME",
            Self::Cash => "CASH",
            Self::Fx => "FX",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for types that are usually reported as group orders.
    #[must_use]
    pub const fn is_multi_leg(&self) -> bool {
        matches!(
            self,
            Self::BuyWrites | Self::Spreads | Self::Combo | Self::MultiLeg
        )
    }
}

impl From<Option<String>> for StatusOrderType {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map_or(Self::Unknown, Self::from_raw)
    }
}

impl fmt::Display for StatusOrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
