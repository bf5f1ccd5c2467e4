//! EMS transport adapter implementing TradeTransportPort.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::ports::{
    PlaceRequest, PlaceResult, PreviewRequest, PreviewResult, TradeTransportPort, TransportError,
};
use crate::domain::order_ticket::{
    Expiration, InstrumentKind, OrderAction, OrderParams, PriceType,
};

use super::api_types::{
    EmsEquityPreviewRequest, EmsFxOrderLeg, EmsFxPreviewRequest, EmsPlaceRequest,
    EmsPlaceResponse, EmsPreviewResponse, STATUS_REVIEW_ORDER, STATUS_SUCCESS,
};
use super::client::EmsHttpClient;
use super::config::HttpTransportConfig;
use super::error::EmsError;

const EQUITY_PREVIEW_PATH: &str = "/order/previewStockOrEtfOrder";
const EQUITY_PLACE_PATH: &str = "/order/placeStockOrEtfOrder";
const FX_PREVIEW_PATH: &str = "/fx/previewFxOrder";
const FX_PLACE_PATH: &str = "/fx/placeFxOrder";

/// Brokerage EMS transport over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTradeTransport {
    client: EmsHttpClient,
}

impl HttpTradeTransport {
    /// Create a new HTTP transport.
    pub fn new(config: &HttpTransportConfig) -> Result<Self, EmsError> {
        Ok(Self {
            client: EmsHttpClient::new(config)?,
        })
    }

    const fn action_code(action: OrderAction) -> &'static str {
        match action {
            OrderAction::Buy => "buy",
            OrderAction::Sell => "sell",
            OrderAction::SellShort => "sellShort",
            OrderAction::BuyToCover => "buyToCover",
        }
    }

    const fn price_type_code(price_type: PriceType) -> &'static str {
        match price_type {
            PriceType::Market => "market",
            PriceType::Limit => "limit",
            PriceType::StopMarket => "stopMarket",
            PriceType::StopLimit => "stopLimit",
        }
    }

    const fn expiration_code(expiration: Expiration) -> &'static str {
        expiration.code()
    }

    async fn preview_equity(
        &self,
        request: &PreviewRequest,
        quantity: Decimal,
        limit_price: Option<Decimal>,
        stop_price: Option<Decimal>,
    ) -> Result<EmsPreviewResponse, EmsError> {
        let body = EmsEquityPreviewRequest {
            api_key: self.client.api_key().to_string(),
            token: self.client.session_token().to_string(),
            account_number: request.account_number.to_string(),
            order_action: Self::action_code(request.action).to_string(),
            order_quantity: quantity,
            order_symbol: request.symbol.to_string(),
            order_price_type: Self::price_type_code(request.price_type).to_string(),
            order_limit_price: limit_price,
            order_stop_price: stop_price,
            order_expiration: Self::expiration_code(request.expiration).to_string(),
        };

        self.client
            .post(EQUITY_PREVIEW_PATH, &body, STATUS_REVIEW_ORDER)
            .await
    }

    async fn preview_fx(
        &self,
        request: &PreviewRequest,
        leg: EmsFxOrderLeg,
    ) -> Result<EmsPreviewResponse, EmsError> {
        let body = EmsFxPreviewRequest {
            api_key: self.client.api_key().to_string(),
            token: self.client.session_token().to_string(),
            account_number: request.account_number.to_string(),
            order_expiration: Self::expiration_code(request.expiration).to_string(),
            fx_order_legs: vec![leg],
        };

        self.client
            .post(FX_PREVIEW_PATH, &body, STATUS_REVIEW_ORDER)
            .await
    }
}

#[async_trait]
impl TradeTransportPort for HttpTradeTransport {
    async fn submit_preview(
        &self,
        request: PreviewRequest,
    ) -> Result<PreviewResult, TransportError> {
        tracing::debug!(
            account = %request.account_number,
            symbol = %request.symbol,
            instrument = ?request.instrument(),
            "Previewing order over HTTP"
        );

        let response = match &request.order {
            OrderParams::Equity {
                quantity,
                limit_price,
                stop_price,
            } => {
                self.preview_equity(
                    &request,
                    quantity.amount(),
                    limit_price.map(|p| p.amount()),
                    stop_price.map(|p| p.amount()),
                )
                .await
            }
            OrderParams::Fx {
                amount,
                rate,
                leverage,
            } => {
                let leg = EmsFxOrderLeg {
                    price_type: Self::price_type_code(request.price_type).to_string(),
                    pair: request.symbol.to_string(),
                    action: Self::action_code(request.action).to_string(),
                    amount: amount.amount(),
                    rate: rate.map(|r| r.amount()),
                    leverage: *leverage,
                };
                self.preview_fx(&request, leg).await
            }
        }
        .map_err(TransportError::from)?;

        Ok(response.into_preview_result())
    }

    async fn submit_place(&self, request: PlaceRequest) -> Result<PlaceResult, TransportError> {
        tracing::debug!(
            account = %request.account_number,
            order_id = %request.order_id,
            "Placing order over HTTP"
        );

        let path = match request.instrument {
            InstrumentKind::Equity => EQUITY_PLACE_PATH,
            InstrumentKind::Fx => FX_PLACE_PATH,
        };

        let body = EmsPlaceRequest {
            api_key: self.client.api_key().to_string(),
            token: self.client.session_token().to_string(),
            account_number: request.account_number.to_string(),
            order_id: request.order_id.to_string(),
        };

        let response: EmsPlaceResponse = self
            .client
            .post(path, &body, STATUS_SUCCESS)
            .await
            .map_err(TransportError::from)?;

        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes() {
        assert_eq!(HttpTradeTransport::action_code(OrderAction::SellShort), "sellShort");
        assert_eq!(HttpTradeTransport::action_code(OrderAction::BuyToCover), "buyToCover");
        assert_eq!(HttpTradeTransport::price_type_code(PriceType::StopLimit), "stopLimit");
        assert_eq!(HttpTradeTransport::expiration_code(Expiration::GoodUntilCanceled), "gtc");
    }

    #[test]
    fn transport_requires_credentials() {
        let config = HttpTransportConfig::new("https://ems.example.com", "", "");
        assert!(HttpTradeTransport::new(&config).is_err());
    }
}
