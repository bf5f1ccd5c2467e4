//! FX ticket payload.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, Quantity};

/// Fields specific to a foreign exchange order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxTicket {
    /// Amount of the base currency.
    pub amount: Option<Quantity>,
    /// Requested rate; required for every non-market price type.
    pub rate: Option<Money>,
    /// Leverage multiplier offered by the broker.
    pub leverage: Option<u32>,
}

impl FxTicket {
    /// Ticket with only the amount set.
    #[must_use]
    pub const fn with_amount(amount: Quantity) -> Self {
        Self {
            amount: Some(amount),
            rate: None,
            leverage: None,
        }
    }

    /// Estimated value in the quote currency: rate times amount.
    #[must_use]
    pub fn estimated_change(&self) -> Option<Money> {
        self.rate?.checked_mul(self.amount?)
    }
}
