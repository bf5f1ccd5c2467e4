//! Ticket defaults applied to new orders.

use serde::{Deserialize, Serialize};

use crate::application::dto::DraftDefaults;
use crate::domain::order_ticket::{Expiration, OrderAction, PriceType};

/// Initial ticket selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDefaultsConfig {
    /// Default action.
    #[serde(default)]
    pub action: OrderAction,
    /// Default price type.
    #[serde(default)]
    pub price_type: PriceType,
    /// Default expiration.
    #[serde(default)]
    pub expiration: Expiration,
}

impl From<TicketDefaultsConfig> for DraftDefaults {
    fn from(config: TicketDefaultsConfig) -> Self {
        Self {
            action: config.action,
            price_type: config.price_type,
            expiration: config.expiration,
        }
    }
}
