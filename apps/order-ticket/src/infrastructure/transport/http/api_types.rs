//! EMS API request and response types.
//!
//! These types map directly to the brokerage EMS JSON format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::{OrderDetails, PlaceResult, PreviewResult};
use crate::domain::shared::{BrokerOrderNumber, PreviewOrderId};

// ============================================================================
// Envelope
// ============================================================================

/// Status value of a preview response.
pub const STATUS_REVIEW_ORDER: &str = "REVIEW_ORDER";
/// Status value of a successful place response.
pub const STATUS_SUCCESS: &str = "SUCCESS";
/// Status value of an error response.
pub const STATUS_ERROR: &str = "ERROR";

/// Fields common to every response, read before the typed body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsEnvelope {
    /// Response status.
    #[serde(default)]
    pub status: String,
}

/// Error response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsErrorResponse {
    /// Numeric error code.
    #[serde(default)]
    pub code: Option<i64>,
    /// One-line summary.
    #[serde(default)]
    pub short_message: Option<String>,
    /// Detailed messages.
    #[serde(default)]
    pub long_messages: Option<Vec<String>>,
    /// Request fields the broker flagged.
    #[serde(default)]
    pub error_fields: Option<Vec<String>>,
}

// ============================================================================
// Request Types
// ============================================================================

/// Equity preview request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsEquityPreviewRequest {
    /// Partner API key.
    pub api_key: String,
    /// Session token.
    pub token: String,
    /// Account number.
    pub account_number: String,
    /// Action (`buy`, `sell`, `sellShort`, `buyToCover`).
    pub order_action: String,
    /// Quantity.
    pub order_quantity: Decimal,
    /// Symbol.
    pub order_symbol: String,
    /// Price type (`market`, `limit`, `stopMarket`, `stopLimit`).
    pub order_price_type: String,
    /// Limit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_limit_price: Option<Decimal>,
    /// Stop price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_stop_price: Option<Decimal>,
    /// Expiration (`day`, `gtc`).
    pub order_expiration: String,
}

/// FX order leg.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsFxOrderLeg {
    /// Price type.
    pub price_type: String,
    /// Currency pair, e.g. `EUR/USD`.
    pub pair: String,
    /// Action.
    pub action: String,
    /// Base currency amount.
    pub amount: Decimal,
    /// Requested rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// Leverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage: Option<u32>,
}

/// FX preview request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsFxPreviewRequest {
    /// Partner API key.
    pub api_key: String,
    /// Session token.
    pub token: String,
    /// Account number.
    pub account_number: String,
    /// Expiration.
    pub order_expiration: String,
    /// Order legs; a ticket order has exactly one.
    pub fx_order_legs: Vec<EmsFxOrderLeg>,
}

/// Place request for a previewed order (equity and FX).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsPlaceRequest {
    /// Partner API key.
    pub api_key: String,
    /// Session token.
    pub token: String,
    /// Account number.
    pub account_number: String,
    /// Id returned by the preview.
    pub order_id: String,
}

// ============================================================================
// Response Types
// ============================================================================

/// Order details of a preview response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsOrderDetails {
    /// Symbol.
    #[serde(default)]
    pub order_symbol: String,
    /// Action label.
    #[serde(default)]
    pub order_action: String,
    /// Quantity.
    #[serde(default)]
    pub order_quantity: Decimal,
    /// Price label.
    #[serde(default)]
    pub order_price: String,
    /// Expiration label.
    #[serde(default)]
    pub order_expiration: String,
    /// Estimated commission.
    #[serde(default)]
    pub estimated_order_commission: Option<Decimal>,
    /// Estimated total.
    #[serde(default)]
    pub estimated_total_value: Option<Decimal>,
    /// Estimated order value.
    #[serde(default)]
    pub estimated_order_value: Option<Decimal>,
    /// Warnings attached to the order.
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Preview response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsPreviewResponse {
    /// Id to place the order with.
    pub order_id: String,
    /// Order details.
    #[serde(default)]
    pub order_details: EmsOrderDetails,
    /// Informational warnings.
    #[serde(default)]
    pub warnings_list: Vec<String>,
    /// Warnings that need acknowledgment.
    #[serde(default)]
    pub ack_warnings_list: Vec<String>,
}

impl EmsPreviewResponse {
    /// Convert to the port result.
    #[must_use]
    pub fn into_preview_result(self) -> PreviewResult {
        let details = self.order_details;
        let mut warnings = details.warnings;
        warnings.extend(self.warnings_list);

        PreviewResult {
            order_id: PreviewOrderId::new(self.order_id),
            details: OrderDetails {
                symbol: details.order_symbol,
                action_label: details.order_action,
                quantity: details.order_quantity,
                price_label: details.order_price,
                expiration_label: details.order_expiration,
                estimated_commission: details.estimated_order_commission,
                estimated_total: details.estimated_total_value,
                estimated_order_value: details.estimated_order_value,
            },
            warnings,
            ack_warnings: self.ack_warnings_list,
        }
    }
}

/// Place response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmsPlaceResponse {
    /// Broker order number.
    pub order_number: String,
    /// Confirmation text.
    #[serde(default)]
    pub confirmation_message: String,
    /// Broker timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl From<EmsPlaceResponse> for PlaceResult {
    fn from(response: EmsPlaceResponse) -> Self {
        Self {
            order_number: BrokerOrderNumber::new(response.order_number),
            confirmation_message: response.confirmation_message,
            timestamp: response.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn preview_response_merges_warnings() {
        let json = r#"{
            "status": "REVIEW_ORDER",
            "orderId": "1",
            "orderDetails": {
                "orderSymbol": "AAPL",
                "orderAction": "Buy",
                "orderQuantity": 5,
                "orderPrice": "Limit 10.00",
                "orderExpiration": "Good for day",
                "estimatedOrderCommission": 4.5,
                "warnings": ["Outside regular hours"]
            },
            "warningsList": ["Price far from market"],
            "ackWarningsList": ["Large order"]
        }"#;

        let response: EmsPreviewResponse = serde_json::from_str(json).unwrap();
        let result = response.into_preview_result();

        assert_eq!(result.order_id.as_str(), "1");
        assert_eq!(result.details.quantity, dec!(5));
        assert_eq!(result.details.estimated_commission, Some(dec!(4.5)));
        assert_eq!(
            result.warnings,
            vec!["Outside regular hours".to_string(), "Price far from market".to_string()]
        );
        assert_eq!(result.ack_warnings, vec!["Large order".to_string()]);
    }

    #[test]
    fn equity_request_serializes_camel_case() {
        let request = EmsEquityPreviewRequest {
            api_key: "key".to_string(),
            token: "token".to_string(),
            account_number: "ACC-1".to_string(),
            order_action: "buy".to_string(),
            order_quantity: dec!(5),
            order_symbol: "AAPL".to_string(),
            order_price_type: "market".to_string(),
            order_limit_price: None,
            order_stop_price: None,
            order_expiration: "day".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["accountNumber"], "ACC-1");
        assert_eq!(json["orderPriceType"], "market");
        assert!(json.get("orderLimitPrice").is_none());
    }

    #[test]
    fn error_response_tolerates_missing_fields() {
        let response: EmsErrorResponse =
            serde_json::from_str(r#"{"status": "ERROR", "code": 600}"#).unwrap();
        assert_eq!(response.code, Some(600));
        assert!(response.short_message.is_none());
        assert!(response.error_fields.is_none());
    }
}
