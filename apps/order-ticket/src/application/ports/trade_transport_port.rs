//! Trade Transport Port (Driven Port)
//!
//! Interface to the brokerage API that previews and places orders.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use crate::domain::order_ticket::{PlaceRequest, PreviewRequest, TransportError};
use crate::domain::shared::{BrokerOrderNumber, PreviewOrderId};

/// Order details echoed back by a preview, for the confirmation screen.
///
/// Passed through as received; the core does not check them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Symbol as the broker understood it.
    pub symbol: String,
    /// Action label (e.g. "Buy").
    pub action_label: String,
    /// Order quantity.
    pub quantity: Decimal,
    /// Price label (e.g. "Limit 10.00").
    pub price_label: String,
    /// Expiration label.
    pub expiration_label: String,
    /// Estimated commission.
    pub estimated_commission: Option<Decimal>,
    /// Estimated total including commission.
    pub estimated_total: Option<Decimal>,
    /// Estimated order value excluding commission.
    pub estimated_order_value: Option<Decimal>,
}

/// Result of a successful preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResult {
    /// Id to place the previewed order with.
    pub order_id: PreviewOrderId,
    /// Order details for confirmation.
    pub details: OrderDetails,
    /// Informational warnings.
    pub warnings: Vec<String>,
    /// Warnings the user must acknowledge before placing.
    pub ack_warnings: Vec<String>,
}

/// Result of a successful place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Broker order number of the placed order.
    pub order_number: BrokerOrderNumber,
    /// Confirmation message for the user.
    pub confirmation_message: String,
    /// Broker timestamp, as sent.
    pub timestamp: Option<String>,
}

/// Port for broker order submission.
///
/// Implementations issue exactly one remote call per method invocation
/// and never retry.
#[async_trait]
pub trait TradeTransportPort: Send + Sync {
    /// Preview an order without executing it.
    async fn submit_preview(&self, request: PreviewRequest)
    -> Result<PreviewResult, TransportError>;

    /// Place a previously previewed order.
    async fn submit_place(&self, request: PlaceRequest) -> Result<PlaceResult, TransportError>;
}
