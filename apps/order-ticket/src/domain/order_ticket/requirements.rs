//! Which conditional ticket fields an order needs.
//!
//! A single table keyed by instrument, price type and field. The ticket
//! shows a row for a field exactly when it is required here, and
//! validation enforces the same rows.

use serde::{Deserialize, Serialize};

use super::aggregate::OrderKind;
use super::value_objects::PriceType;

/// Conditional order field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    /// Limit price (equity).
    LimitPrice,
    /// Stop trigger price (equity).
    StopPrice,
    /// Time in force.
    Expiration,
    /// Requested FX rate.
    Rate,
}

impl OrderField {
    /// Field name as reported in validation errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LimitPrice => "limit_price",
            Self::StopPrice => "stop_price",
            Self::Expiration => "expiration",
            Self::Rate => "rate",
        }
    }
}

/// Returns true if `field` must be set for an order of `kind` priced as `price_type`.
#[must_use]
pub const fn is_required(kind: &OrderKind, price_type: PriceType, field: OrderField) -> bool {
    match (kind, field) {
        (OrderKind::Equity(_), OrderField::LimitPrice) => price_type.uses_limit_price(),
        (OrderKind::Equity(_), OrderField::StopPrice) => price_type.uses_stop_price(),
        (OrderKind::Fx(_), OrderField::Rate) => !price_type.is_market(),
        (_, OrderField::Expiration) => !price_type.is_market(),
        (OrderKind::Equity(_), OrderField::Rate)
        | (OrderKind::Fx(_), OrderField::LimitPrice | OrderField::StopPrice) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_ticket::aggregate::{EquityTicket, FxTicket};

    fn equity() -> OrderKind {
        OrderKind::Equity(EquityTicket::default())
    }

    fn fx() -> OrderKind {
        OrderKind::Fx(FxTicket::default())
    }

    #[test]
    fn equity_requirement_table() {
        let expected = [
            (PriceType::Market, false, false, false),
            (PriceType::Limit, true, false, true),
            (PriceType::StopMarket, false, true, true),
            (PriceType::StopLimit, true, true, true),
        ];

        for (price_type, limit, stop, expiration) in expected {
            let kind = equity();
            assert_eq!(is_required(&kind, price_type, OrderField::LimitPrice), limit, "{price_type}");
            assert_eq!(is_required(&kind, price_type, OrderField::StopPrice), stop, "{price_type}");
            assert_eq!(
                is_required(&kind, price_type, OrderField::Expiration),
                expiration,
                "{price_type}"
            );
            assert!(!is_required(&kind, price_type, OrderField::Rate));
        }
    }

    #[test]
    fn fx_requires_rate_unless_market() {
        let kind = fx();
        assert!(!is_required(&kind, PriceType::Market, OrderField::Rate));
        assert!(is_required(&kind, PriceType::Limit, OrderField::Rate));
        assert!(is_required(&kind, PriceType::StopMarket, OrderField::Rate));
        assert!(is_required(&kind, PriceType::StopLimit, OrderField::Expiration));
    }

    #[test]
    fn fx_never_requires_equity_prices() {
        let kind = fx();
        for price_type in PriceType::ALL {
            assert!(!is_required(&kind, price_type, OrderField::LimitPrice));
            assert!(!is_required(&kind, price_type, OrderField::StopPrice));
        }
    }
}
