//! Equity ticket payload.

use serde::{Deserialize, Serialize};

use crate::domain::order_ticket::value_objects::PriceType;
use crate::domain::shared::{Money, Quantity};

/// Fields specific to a stock or ETF order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityTicket {
    /// Number of shares.
    pub quantity: Option<Quantity>,
    /// Limit price for Limit and StopLimit orders.
    pub limit_price: Option<Money>,
    /// Stop trigger price for StopMarket and StopLimit orders.
    pub stop_price: Option<Money>,
    /// Last quoted price, used only to estimate market orders.
    pub last_quote_price: Option<Money>,
}

impl EquityTicket {
    /// Ticket with only the quantity set.
    #[must_use]
    pub const fn with_quantity(quantity: Quantity) -> Self {
        Self {
            quantity: Some(quantity),
            limit_price: None,
            stop_price: None,
            last_quote_price: None,
        }
    }

    /// Price the estimate is based on for `price_type`.
    #[must_use]
    pub const fn estimate_price(&self, price_type: PriceType) -> Option<Money> {
        match price_type {
            PriceType::Market => self.last_quote_price,
            PriceType::Limit | PriceType::StopLimit => self.limit_price,
            PriceType::StopMarket => self.stop_price,
        }
    }

    /// Estimated order value: price times quantity.
    ///
    /// `None` when either operand is unset or the product overflows.
    #[must_use]
    pub fn estimated_change(&self, price_type: PriceType) -> Option<Money> {
        let price = self.estimate_price(price_type)?;
        price.checked_mul(self.quantity?)
    }
}
