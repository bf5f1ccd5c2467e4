//! Requests sent to the broker transport.
//!
//! Built from a validated order; the transport maps them onto its wire format.

use serde::{Deserialize, Serialize};

use super::value_objects::{Expiration, OrderAction, PriceType};
use crate::domain::shared::{AccountNumber, Money, PreviewOrderId, Quantity, Symbol};

/// Instrument family, selecting the broker endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    /// Stocks and ETFs.
    Equity,
    /// Foreign exchange.
    Fx,
}

/// Kind-specific order parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderParams {
    /// Equity order.
    Equity {
        /// Share quantity.
        quantity: Quantity,
        /// Limit price, set only when the price type uses one.
        limit_price: Option<Money>,
        /// Stop price, set only when the price type uses one.
        stop_price: Option<Money>,
    },
    /// FX order.
    Fx {
        /// Base currency amount.
        amount: Quantity,
        /// Requested rate, set only for non-market orders.
        rate: Option<Money>,
        /// Leverage, if chosen.
        leverage: Option<u32>,
    },
}

impl OrderParams {
    /// Instrument family of these parameters.
    #[must_use]
    pub const fn instrument(&self) -> InstrumentKind {
        match self {
            Self::Equity { .. } => InstrumentKind::Equity,
            Self::Fx { .. } => InstrumentKind::Fx,
        }
    }
}

/// Preview request for a validated order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Account the order is for.
    pub account_number: AccountNumber,
    /// Symbol or currency pair.
    pub symbol: Symbol,
    /// Order action.
    pub action: OrderAction,
    /// Price type.
    pub price_type: PriceType,
    /// Expiration (always sent).
    pub expiration: Expiration,
    /// Kind-specific parameters.
    pub order: OrderParams,
}

impl PreviewRequest {
    /// Instrument family of the request.
    #[must_use]
    pub const fn instrument(&self) -> InstrumentKind {
        self.order.instrument()
    }
}

/// Place request for a previously previewed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRequest {
    /// Account the order was previewed for.
    pub account_number: AccountNumber,
    /// Id returned by the preview.
    pub order_id: PreviewOrderId,
    /// Instrument family of the previewed order.
    pub instrument: InstrumentKind,
}
