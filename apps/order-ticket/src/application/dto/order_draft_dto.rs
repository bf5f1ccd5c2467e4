//! Order draft DTOs

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_ticket::{
    EquityTicket, Expiration, FxTicket, InstrumentKind, LinkedAccount, LinkedBroker, Order,
    OrderAction, OrderKind, PriceType,
};
use crate::domain::shared::{DomainError, Money, Quantity, Symbol};

/// Ticket selections used when a draft leaves them out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftDefaults {
    /// Default action.
    pub action: OrderAction,
    /// Default price type.
    pub price_type: PriceType,
    /// Default expiration.
    pub expiration: Expiration,
}

/// DTO for an order draft read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraftDto {
    /// Broker the account belongs to.
    pub broker: String,
    /// Account number.
    pub account_number: String,
    /// Account display name.
    #[serde(default)]
    pub account_name: Option<String>,
    /// Instrument family.
    #[serde(default = "default_instrument")]
    pub instrument: InstrumentKind,
    /// Symbol or currency pair.
    pub symbol: Option<String>,
    /// Action.
    pub action: Option<OrderAction>,
    /// Price type.
    pub price_type: Option<PriceType>,
    /// Expiration.
    pub expiration: Option<Expiration>,
    /// Equity quantity.
    pub quantity: Option<Decimal>,
    /// Equity limit price.
    pub limit_price: Option<Decimal>,
    /// Equity stop price.
    pub stop_price: Option<Decimal>,
    /// Last quote, for the estimate of market orders.
    pub last_quote_price: Option<Decimal>,
    /// FX amount.
    pub amount: Option<Decimal>,
    /// FX rate.
    pub rate: Option<Decimal>,
    /// FX leverage.
    pub leverage: Option<u32>,
}

const fn default_instrument() -> InstrumentKind {
    InstrumentKind::Equity
}

impl OrderDraftDto {
    /// Convert to a domain Order linked to a fresh broker and account.
    ///
    /// # Errors
    ///
    /// Returns error if the account number is blank or a field belongs to
    /// the other instrument family.
    pub fn into_order(self, defaults: DraftDefaults) -> Result<Order, DomainError> {
        if self.account_number.trim().is_empty() {
            return Err(DomainError::invalid(
                "account_number",
                "Account number cannot be empty",
            ));
        }

        let kind = match self.instrument {
            InstrumentKind::Equity => {
                reject_field("amount", self.amount.is_some())?;
                reject_field("rate", self.rate.is_some())?;
                reject_field("leverage", self.leverage.is_some())?;
                OrderKind::Equity(EquityTicket {
                    quantity: self.quantity.map(Quantity::new),
                    limit_price: self.limit_price.map(Money::new),
                    stop_price: self.stop_price.map(Money::new),
                    last_quote_price: self.last_quote_price.map(Money::new),
                })
            }
            InstrumentKind::Fx => {
                reject_field("quantity", self.quantity.is_some())?;
                reject_field("limit_price", self.limit_price.is_some())?;
                reject_field("stop_price", self.stop_price.is_some())?;
                OrderKind::Fx(FxTicket {
                    amount: self.amount.map(Quantity::new),
                    rate: self.rate.map(Money::new),
                    leverage: self.leverage,
                })
            }
        };

        let broker = Arc::new(LinkedBroker::new(self.broker));
        let account_name = self
            .account_name
            .unwrap_or_else(|| self.account_number.clone());
        let account = Arc::new(LinkedAccount::new(
            self.account_number,
            account_name,
            broker,
        ));

        let mut order = Order::new(kind)
            .with_account(account)
            .with_action(self.action.unwrap_or(defaults.action))
            .with_price_type(self.price_type.unwrap_or(defaults.price_type))
            .with_expiration(self.expiration.unwrap_or(defaults.expiration));
        order.set_symbol(self.symbol.map(Symbol::new));

        Ok(order)
    }
}

fn reject_field(field: &str, present: bool) -> Result<(), DomainError> {
    if present {
        Err(DomainError::invalid(
            field,
            "Field does not apply to this instrument",
        ))
    } else {
        Ok(())
    }
}
