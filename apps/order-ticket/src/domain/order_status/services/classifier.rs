//! Order Status Classifier
//!
//! Sorts reported orders into the sections of an order list and decides
//! whether they can still be canceled.

use serde::{Deserialize, Serialize};

use super::AggregationRule;
use crate::domain::order_status::record::OrderStatusRecord;
use crate::domain::order_status::value_objects::StatusCategory;

/// Stateless classifier over status records.
pub struct OrderStatusClassifier;

impl OrderStatusClassifier {
    /// Returns true if `record` belongs to `category`.
    ///
    /// A single order belongs when its status is in the category. A group
    /// order is judged from its legs with the rule for that category.
    #[must_use]
    pub fn belongs_to(category: StatusCategory, record: &OrderStatusRecord) -> bool {
        if record.group_legs.is_empty() {
            return category.contains(record.status);
        }

        AggregationRule::for_category(category).evaluate(category, &record.group_legs)
    }

    /// Returns true if the record has legs.
    #[must_use]
    pub fn is_group_order(record: &OrderStatusRecord) -> bool {
        !record.group_legs.is_empty()
    }

    /// Open section (pending, open, pending cancel).
    #[must_use]
    pub fn belongs_to_open_category(record: &OrderStatusRecord) -> bool {
        Self::belongs_to(StatusCategory::Open, record)
    }

    /// Partially filled section.
    #[must_use]
    pub fn belongs_to_partially_filled_category(record: &OrderStatusRecord) -> bool {
        Self::belongs_to(StatusCategory::PartiallyFilled, record)
    }

    /// Filled section.
    #[must_use]
    pub fn belongs_to_filled_category(record: &OrderStatusRecord) -> bool {
        Self::belongs_to(StatusCategory::Filled, record)
    }

    /// Other section (canceled, rejected, not found, expired, unknown).
    #[must_use]
    pub fn belongs_to_other_category(record: &OrderStatusRecord) -> bool {
        Self::belongs_to(StatusCategory::Other, record)
    }

    /// Returns true if the user may cancel the order.
    ///
    /// Unknown statuses count as cancellable. Use this rather than
    /// combining the section predicates.
    #[must_use]
    pub fn is_cancellable(record: &OrderStatusRecord) -> bool {
        Self::belongs_to(StatusCategory::Cancellable, record)
    }

    /// Display categories the record belongs to.
    ///
    /// Exactly one for a single order. A group may match none, e.g. when
    /// every leg is canceled or expired.
    #[must_use]
    pub fn categories(record: &OrderStatusRecord) -> Vec<StatusCategory> {
        StatusCategory::DISPLAY
            .into_iter()
            .filter(|&category| Self::belongs_to(category, record))
            .collect()
    }

    /// All classification flags for a record.
    #[must_use]
    pub fn summarize(record: &OrderStatusRecord) -> StatusSummary {
        StatusSummary {
            order_number: record.order_number.clone(),
            is_group_order: Self::is_group_order(record),
            open: Self::belongs_to_open_category(record),
            partially_filled: Self::belongs_to_partially_filled_category(record),
            filled: Self::belongs_to_filled_category(record),
            other: Self::belongs_to_other_category(record),
            cancellable: Self::is_cancellable(record),
        }
    }
}

/// Classification of one record, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Broker order number.
    pub order_number: Option<String>,
    /// Record has legs.
    pub is_group_order: bool,
    /// Open section.
    pub open: bool,
    /// Partially filled section.
    pub partially_filled: bool,
    /// Filled section.
    pub filled: bool,
    /// Other section.
    pub other: bool,
    /// Cancel button enabled.
    pub cancellable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_status::value_objects::OrderStatus;

    #[test]
    fn single_open_order() {
        let record = OrderStatusRecord::new(OrderStatus::Open);
        assert!(OrderStatusClassifier::belongs_to_open_category(&record));
        assert!(OrderStatusClassifier::is_cancellable(&record));
        assert!(!OrderStatusClassifier::belongs_to_partially_filled_category(&record));
        assert!(!OrderStatusClassifier::belongs_to_filled_category(&record));
        assert!(!OrderStatusClassifier::belongs_to_other_category(&record));
        assert!(!OrderStatusClassifier::is_group_order(&record));
    }

    #[test]
    fn unknown_single_order_is_other_and_cancellable() {
        let record = OrderStatusRecord::new(OrderStatus::Unknown);
        assert!(OrderStatusClassifier::belongs_to_other_category(&record));
        assert!(!OrderStatusClassifier::belongs_to_open_category(&record));
        assert!(OrderStatusClassifier::is_cancellable(&record));
    }

    #[test]
    fn filled_and_canceled_group_is_never_other() {
        // A filled leg keeps the group out of Other even though the
        // unfilled leg is canceled; it lands in PartiallyFilled only.
        let record = OrderStatusRecord::group_of(&[OrderStatus::Filled, OrderStatus::Canceled]);
        assert!(!OrderStatusClassifier::belongs_to_other_category(&record));
        assert_eq!(
            OrderStatusClassifier::categories(&record),
            vec![StatusCategory::PartiallyFilled]
        );
        assert!(!OrderStatusClassifier::is_cancellable(&record));
    }

    #[test]
    fn group_can_match_no_category() {
        // Every leg is in Other, so the legs never spread across categories.
        let record = OrderStatusRecord::group_of(&[OrderStatus::Canceled, OrderStatus::Expired]);
        assert!(OrderStatusClassifier::categories(&record).is_empty());
    }

    #[test]
    fn cancellable_group_needs_every_leg_cancellable() {
        let open_legs = OrderStatusRecord::group_of(&[OrderStatus::Open, OrderStatus::PartFilled]);
        assert!(OrderStatusClassifier::is_cancellable(&open_legs));

        let mixed = OrderStatusRecord::group_of(&[OrderStatus::Open, OrderStatus::Filled]);
        assert!(!OrderStatusClassifier::is_cancellable(&mixed));
    }

    #[test]
    fn nested_groups_are_classified_recursively() {
        let inner = OrderStatusRecord::group_of(&[OrderStatus::Filled, OrderStatus::Filled]);
        let outer = OrderStatusRecord::group(vec![inner, OrderStatusRecord::new(OrderStatus::Filled)]);
        assert!(OrderStatusClassifier::belongs_to_filled_category(&outer));
        assert_eq!(OrderStatusClassifier::categories(&outer), vec![StatusCategory::Filled]);
    }

    #[test]
    fn summary_collects_flags() {
        let record = OrderStatusRecord::group_of(&[OrderStatus::Filled, OrderStatus::PartFilled])
            .with_order_number("77");
        let summary = OrderStatusClassifier::summarize(&record);

        assert_eq!(
            summary,
            StatusSummary {
                order_number: Some("77".to_string()),
                is_group_order: true,
                open: false,
                partially_filled: true,
                filled: false,
                other: false,
                cancellable: false,
            }
        );
    }
}
