//! In-memory trade transport for tests and dry runs.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{
    OrderDetails, PlaceRequest, PlaceResult, PreviewRequest, PreviewResult, TradeTransportPort,
    TransportError,
};
use crate::domain::order_ticket::OrderParams;
use crate::domain::shared::{BrokerOrderNumber, PreviewOrderId};

/// In-memory implementation of `TradeTransportPort`.
///
/// Records every request and answers with generated ids. Failures can be
/// scripted per call. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryTradeTransport {
    preview_requests: RwLock<Vec<PreviewRequest>>,
    place_requests: RwLock<Vec<PlaceRequest>>,
    preview_failures: RwLock<VecDeque<TransportError>>,
    place_failures: RwLock<VecDeque<TransportError>>,
    sequence: AtomicU64,
}

impl InMemoryTradeTransport {
    /// Create a transport that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next preview with `error`.
    pub fn fail_next_preview(&self, error: TransportError) {
        self.preview_failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(error);
    }

    /// Fail the next place with `error`.
    pub fn fail_next_place(&self, error: TransportError) {
        self.place_failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(error);
    }

    /// Preview requests received so far.
    #[must_use]
    pub fn preview_requests(&self) -> Vec<PreviewRequest> {
        self.preview_requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Place requests received so far.
    #[must_use]
    pub fn place_requests(&self) -> Vec<PlaceRequest> {
        self.place_requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn details_for(request: &PreviewRequest) -> OrderDetails {
        let (quantity, price) = match &request.order {
            OrderParams::Equity {
                quantity,
                limit_price,
                stop_price,
            } => (*quantity, limit_price.or(*stop_price)),
            OrderParams::Fx { amount, rate, .. } => (*amount, *rate),
        };

        let price_label = price.map_or_else(
            || request.price_type.label().to_string(),
            |p| format!("{} {p}", request.price_type.label()),
        );

        OrderDetails {
            symbol: request.symbol.to_string(),
            action_label: request.action.label().to_string(),
            quantity: quantity.amount(),
            price_label,
            expiration_label: request.expiration.label().to_string(),
            estimated_commission: None,
            estimated_total: None,
            estimated_order_value: price
                .and_then(|p| p.checked_mul(quantity))
                .map(|value| value.amount()),
        }
    }
}

#[async_trait]
impl TradeTransportPort for InMemoryTradeTransport {
    async fn submit_preview(
        &self,
        request: PreviewRequest,
    ) -> Result<PreviewResult, TransportError> {
        let details = Self::details_for(&request);
        self.preview_requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let failure = self
            .preview_failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        Ok(PreviewResult {
            order_id: PreviewOrderId::new(format!("PREVIEW-{}", self.next_id())),
            details,
            warnings: Vec::new(),
            ack_warnings: Vec::new(),
        })
    }

    async fn submit_place(&self, request: PlaceRequest) -> Result<PlaceResult, TransportError> {
        let order_id = request.order_id.clone();
        self.place_requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let failure = self
            .place_failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        Ok(PlaceResult {
            order_number: BrokerOrderNumber::new(format!("ORDER-{}", self.next_id())),
            confirmation_message: format!("Order {order_id} placed"),
            timestamp: None,
        })
    }
}
