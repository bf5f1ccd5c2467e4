//! Rules deciding whether a group order belongs to a category.
//!
//! A group is judged by the memberships of its legs. Which rule applies
//! depends on the category being tested.

use serde::{Deserialize, Serialize};

use super::OrderStatusClassifier;
use crate::domain::order_status::record::OrderStatusRecord;
use crate::domain::order_status::value_objects::StatusCategory;

/// Strategy for lifting leg memberships to the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationRule {
    /// At least one leg is filled and at least one is not.
    SomeFilledSomeNot,
    /// Legs are spread over at least two of the open, partially filled
    /// and other categories, and no leg is filled.
    SpreadAcrossUnfilled,
    /// At least one leg belongs and no leg fails to belong.
    AllLegsAgree,
}

impl AggregationRule {
    /// Rule used when testing a group against `category`.
    #[must_use]
    pub const fn for_category(category: StatusCategory) -> Self {
        match category {
            StatusCategory::PartiallyFilled => Self::SomeFilledSomeNot,
            StatusCategory::Other => Self::SpreadAcrossUnfilled,
            StatusCategory::Open | StatusCategory::Filled | StatusCategory::Cancellable => {
                Self::AllLegsAgree
            }
        }
    }

    /// Apply the rule to the legs of a group tested against `category`.
    #[must_use]
    pub fn evaluate(self, category: StatusCategory, legs: &[OrderStatusRecord]) -> bool {
        let belongs = |category: StatusCategory, leg: &OrderStatusRecord| {
            OrderStatusClassifier::belongs_to(category, leg)
        };

        match self {
            Self::SomeFilledSomeNot => {
                let filled = legs
                    .iter()
                    .filter(|&leg| belongs(StatusCategory::Filled, leg))
                    .count();
                filled > 0 && filled < legs.len()
            }
            Self::SpreadAcrossUnfilled => {
                let any_filled = legs.iter().any(|leg| belongs(StatusCategory::Filled, leg));
                let occupied = [
                    StatusCategory::Open,
                    StatusCategory::PartiallyFilled,
                    StatusCategory::Other,
                ]
                .into_iter()
                .filter(|&c| legs.iter().any(|leg| belongs(c, leg)))
                .count();
                occupied >= 2 && !any_filled
            }
            Self::AllLegsAgree => {
                legs.iter().any(|leg| belongs(category, leg))
                    && legs.iter().all(|leg| belongs(category, leg))
            }
        }
    }
}
