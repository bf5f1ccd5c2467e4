//! Preview Order Use Case
//!
//! Sends a draft order for preview and hands back a single-use capability
//! to place exactly the order that was previewed.

use std::sync::Arc;

use crate::application::ports::{PlaceRequest, PlaceResult, PreviewResult, TradeTransportPort};
use crate::domain::order_ticket::{Order, OrderError};
use crate::domain::shared::PreviewOrderId;

/// Use case for previewing orders.
pub struct PreviewOrderUseCase<T>
where
    T: TradeTransportPort,
{
    transport: Arc<T>,
}

impl<T> PreviewOrderUseCase<T>
where
    T: TradeTransportPort,
{
    /// Create a new PreviewOrderUseCase.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Preview `order`.
    ///
    /// Local failures return before the transport is called. A transport
    /// failure is also recorded on the account's broker.
    ///
    /// # Errors
    ///
    /// `MissingAccount` when no account is set, `InvalidOrder` when the
    /// order does not validate, `Transport` when the broker call fails.
    pub async fn execute(&self, order: &Order) -> Result<PreviewedOrder<T>, OrderError> {
        let account = order.account().ok_or(OrderError::MissingAccount)?;
        let request = order.to_preview_request()?;

        let account_number = request.account_number.clone();
        let instrument = request.instrument();

        tracing::info!(
            account = %account_number,
            symbol = %request.symbol,
            action = %request.action,
            price_type = %request.price_type,
            "Submitting order preview"
        );

        match self.transport.submit_preview(request).await {
            Ok(preview) => {
                tracing::info!(
                    account = %account_number,
                    order_id = %preview.order_id,
                    warnings = preview.warnings.len() + preview.ack_warnings.len(),
                    "Order previewed"
                );

                let placement = PendingPlacement {
                    transport: Arc::clone(&self.transport),
                    request: PlaceRequest {
                        account_number,
                        order_id: preview.order_id.clone(),
                        instrument,
                    },
                };

                Ok(PreviewedOrder { preview, placement })
            }
            Err(e) => {
                tracing::warn!(
                    account = %account_number,
                    broker = account.broker().name(),
                    error = %e,
                    "Order preview failed"
                );
                account.broker().record_error(e.clone());
                Err(OrderError::Transport(e))
            }
        }
    }
}

/// A successful preview and the capability to place it.
pub struct PreviewedOrder<T>
where
    T: TradeTransportPort,
{
    /// Preview returned by the broker.
    pub preview: PreviewResult,
    /// Single-use place capability bound to `preview.order_id`.
    pub placement: PendingPlacement<T>,
}

impl<T> PreviewedOrder<T>
where
    T: TradeTransportPort,
{
    /// Split into preview and placement.
    pub fn into_parts(self) -> (PreviewResult, PendingPlacement<T>) {
        (self.preview, self.placement)
    }
}

/// Permission to place one previewed order.
///
/// Only a successful preview creates one, and placing consumes it. To
/// place again, preview again.
pub struct PendingPlacement<T>
where
    T: TradeTransportPort,
{
    transport: Arc<T>,
    request: PlaceRequest,
}

impl<T> PendingPlacement<T>
where
    T: TradeTransportPort,
{
    /// Id of the previewed order this placement is bound to.
    pub const fn order_id(&self) -> &PreviewOrderId {
        &self.request.order_id
    }

    /// Place the previewed order.
    ///
    /// # Errors
    ///
    /// Returns `Transport` when the broker call fails. The error is not
    /// recorded on the broker.
    pub async fn place(self) -> Result<PlaceResult, OrderError> {
        let Self { transport, request } = self;
        let order_id = request.order_id.clone();

        tracing::info!(
            account = %request.account_number,
            order_id = %order_id,
            "Placing previewed order"
        );

        match transport.submit_place(request).await {
            Ok(result) => {
                tracing::info!(
                    order_id = %order_id,
                    order_number = %result.order_number,
                    "Order placed"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Order placement failed");
                Err(OrderError::Transport(e))
            }
        }
    }
}

impl<T> std::fmt::Debug for PendingPlacement<T>
where
    T: TradeTransportPort,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingPlacement")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl<T> std::fmt::Debug for PreviewedOrder<T>
where
    T: TradeTransportPort,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewedOrder")
            .field("preview", &self.preview)
            .field("placement", &self.placement)
            .finish()
    }
}
