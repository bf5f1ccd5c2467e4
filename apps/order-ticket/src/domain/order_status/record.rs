//! Order status record as returned by the broker.

use serde::{Deserialize, Deserializer, Serialize};

use super::services::OrderStatusClassifier;
use super::value_objects::{OrderStatus, StatusCategory, StatusOrderType};

/// A reported order, possibly a group of sibling leg orders.
///
/// Legs are owned by their group and never point back at it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusRecord {
    /// Broker order number, absent for some group legs.
    #[serde(default)]
    pub order_number: Option<String>,
    /// Reported status.
    #[serde(rename = "orderStatus", default)]
    pub status: OrderStatus,
    /// Reported order type.
    #[serde(default)]
    pub order_type: StatusOrderType,
    /// Leg orders of a group order; empty for a single order.
    #[serde(
        rename = "groupOrders",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub group_legs: Vec<OrderStatusRecord>,
}

impl OrderStatusRecord {
    /// Single order with the given status.
    #[must_use]
    pub fn new(status: OrderStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Group order made of `legs`.
    #[must_use]
    pub fn group(legs: Vec<Self>) -> Self {
        Self {
            group_legs: legs,
            ..Self::default()
        }
    }

    /// Group order whose legs have the given statuses.
    #[must_use]
    pub fn group_of(statuses: &[OrderStatus]) -> Self {
        Self::group(statuses.iter().copied().map(Self::new).collect())
    }

    /// Set the order number (builder style).
    #[must_use]
    pub fn with_order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = Some(order_number.into());
        self
    }

    /// Set the order type (builder style).
    #[must_use]
    pub const fn with_order_type(mut self, order_type: StatusOrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// Returns true if this record has legs.
    #[must_use]
    pub fn is_group_order(&self) -> bool {
        OrderStatusClassifier::is_group_order(self)
    }

    /// Returns true if the order belongs in the open section.
    #[must_use]
    pub fn belongs_to_open_category(&self) -> bool {
        OrderStatusClassifier::belongs_to_open_category(self)
    }

    /// Returns true if the order belongs in the partially filled section.
    #[must_use]
    pub fn belongs_to_partially_filled_category(&self) -> bool {
        OrderStatusClassifier::belongs_to_partially_filled_category(self)
    }

    /// Returns true if the order belongs in the filled section.
    #[must_use]
    pub fn belongs_to_filled_category(&self) -> bool {
        OrderStatusClassifier::belongs_to_filled_category(self)
    }

    /// Returns true if the order belongs in the other section.
    #[must_use]
    pub fn belongs_to_other_category(&self) -> bool {
        OrderStatusClassifier::belongs_to_other_category(self)
    }

    /// Returns true if the user may cancel the order.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        OrderStatusClassifier::is_cancellable(self)
    }

    /// Display categories the order belongs to.
    #[must_use]
    pub fn categories(&self) -> Vec<StatusCategory> {
        OrderStatusClassifier::categories(self)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<OrderStatusRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<OrderStatusRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_broker_shape() {
        let json = r#"{
            "orderNumber": "1001",
            "orderStatus": "PART_FILLED",
            "orderType": "EQUITY_OR_ETF",
            "groupOrders": []
        }"#;

        let record: OrderStatusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.order_number.as_deref(), Some("1001"));
        assert_eq!(record.status, OrderStatus::PartFilled);
        assert_eq!(record.order_type, StatusOrderType::EquityOrEtf);
        assert!(!record.is_group_order());
    }

    #[test]
    fn record_tolerates_missing_and_unknown_fields() {
        let json = r#"{"orderStatus": "ON_HOLD", "groupOrders": null}"#;

        let record: OrderStatusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, OrderStatus::Unknown);
        assert_eq!(record.order_type, StatusOrderType::Unknown);
        assert!(record.order_number.is_none());
        assert!(record.group_legs.is_empty());
    }

    #[test]
    fn group_record_deserializes_legs() {
        let json = r#"{
            "orderNumber": "2001",
            "orderType": "SPREADS",
            "groupOrders": [
                {"orderStatus": "FILLED", "orderType": "OPTION"},
                {"orderStatus": "OPEN", "orderType": "OPTION"}
            ]
        }"#;

        let record: OrderStatusRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_group_order());
        assert_eq!(record.group_legs.len(), 2);
        assert!(record.belongs_to_partially_filled_category());
    }

    #[test]
    fn builders() {
        let record = OrderStatusRecord::new(OrderStatus::Open)
            .with_order_number("42")
            .with_order_type(StatusOrderType::Fx);
        assert_eq!(record.order_number.as_deref(), Some("42"));
        assert_eq!(record.order_type, StatusOrderType::Fx);
        assert!(record.is_cancellable());
        assert_eq!(record.categories(), vec![StatusCategory::Open]);
    }
}
