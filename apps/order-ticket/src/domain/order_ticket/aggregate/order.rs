//! Order Aggregate Root
//!
//! A draft order as edited on the ticket. Every setter leaves the order in
//! a state `is_valid` can judge; nothing is checked until `validate` or
//! `to_preview_request` is called.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{EquityTicket, FxTicket};
use crate::domain::order_ticket::account::LinkedAccount;
use crate::domain::order_ticket::errors::OrderError;
use crate::domain::order_ticket::requests::{InstrumentKind, OrderParams, PreviewRequest};
use crate::domain::order_ticket::requirements::{OrderField, is_required};
use crate::domain::order_ticket::value_objects::{Expiration, OrderAction, PriceType};
use crate::domain::shared::{Money, Quantity, Symbol};

/// Instrument-specific part of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    /// Stock or ETF order.
    Equity(EquityTicket),
    /// Foreign exchange order.
    Fx(FxTicket),
}

impl OrderKind {
    /// Instrument family.
    #[must_use]
    pub const fn instrument(&self) -> InstrumentKind {
        match self {
            Self::Equity(_) => InstrumentKind::Equity,
            Self::Fx(_) => InstrumentKind::Fx,
        }
    }
}

/// Order Aggregate Root.
#[derive(Debug, Clone)]
pub struct Order {
    account: Option<Arc<LinkedAccount>>,
    symbol: Option<Symbol>,
    action: OrderAction,
    price_type: PriceType,
    expiration: Expiration,
    kind: OrderKind,
}

impl Order {
    /// Create an empty order of the given kind with default selections.
    #[must_use]
    pub fn new(kind: OrderKind) -> Self {
        Self {
            account: None,
            symbol: None,
            action: OrderAction::default(),
            price_type: PriceType::default(),
            expiration: Expiration::default(),
            kind,
        }
    }

    /// Create an empty equity order.
    #[must_use]
    pub fn new_equity() -> Self {
        Self::new(OrderKind::Equity(EquityTicket::default()))
    }

    /// Create an empty equity order with preselected ticket values.
    #[must_use]
    pub fn new_equity_with(
        action: OrderAction,
        price_type: PriceType,
        expiration: Expiration,
    ) -> Self {
        Self::new_equity()
            .with_action(action)
            .with_price_type(price_type)
            .with_expiration(expiration)
    }

    /// Create an empty FX order.
    #[must_use]
    pub fn new_fx() -> Self {
        Self::new(OrderKind::Fx(FxTicket::default()))
    }

    /// Set the account (builder style).
    #[must_use]
    pub fn with_account(mut self, account: Arc<LinkedAccount>) -> Self {
        self.account = Some(account);
        self
    }

    /// Set the symbol (builder style).
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the action (builder style).
    #[must_use]
    pub fn with_action(mut self, action: OrderAction) -> Self {
        self.action = action;
        self
    }

    /// Set the price type (builder style).
    #[must_use]
    pub fn with_price_type(mut self, price_type: PriceType) -> Self {
        self.price_type = price_type;
        self
    }

    /// Set the expiration (builder style).
    #[must_use]
    pub fn with_expiration(mut self, expiration: Expiration) -> Self {
        self.expiration = expiration;
        self
    }

    // Accessors

    /// Linked account, if chosen.
    #[must_use]
    pub const fn account(&self) -> Option<&Arc<LinkedAccount>> {
        self.account.as_ref()
    }

    /// Symbol or currency pair, if chosen.
    #[must_use]
    pub const fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Order action.
    #[must_use]
    pub const fn action(&self) -> OrderAction {
        self.action
    }

    /// Price type.
    #[must_use]
    pub const fn price_type(&self) -> PriceType {
        self.price_type
    }

    /// Expiration.
    #[must_use]
    pub const fn expiration(&self) -> Expiration {
        self.expiration
    }

    /// Instrument-specific payload.
    #[must_use]
    pub const fn kind(&self) -> &OrderKind {
        &self.kind
    }

    /// Equity payload, if this is an equity order.
    #[must_use]
    pub const fn equity(&self) -> Option<&EquityTicket> {
        match &self.kind {
            OrderKind::Equity(ticket) => Some(ticket),
            OrderKind::Fx(_) => None,
        }
    }

    /// FX payload, if this is an FX order.
    #[must_use]
    pub const fn fx(&self) -> Option<&FxTicket> {
        match &self.kind {
            OrderKind::Fx(ticket) => Some(ticket),
            OrderKind::Equity(_) => None,
        }
    }

    /// Mutable equity payload, if this is an equity order.
    pub const fn equity_mut(&mut self) -> Option<&mut EquityTicket> {
        match &mut self.kind {
            OrderKind::Equity(ticket) => Some(ticket),
            OrderKind::Fx(_) => None,
        }
    }

    /// Mutable FX payload, if this is an FX order.
    pub const fn fx_mut(&mut self) -> Option<&mut FxTicket> {
        match &mut self.kind {
            OrderKind::Fx(ticket) => Some(ticket),
            OrderKind::Equity(_) => None,
        }
    }

    // Setters

    /// Set or clear the linked account.
    pub fn set_account(&mut self, account: Option<Arc<LinkedAccount>>) {
        self.account = account;
    }

    /// Set or clear the symbol.
    pub fn set_symbol(&mut self, symbol: Option<Symbol>) {
        self.symbol = symbol;
    }

    /// Set the order action.
    pub const fn set_action(&mut self, action: OrderAction) {
        self.action = action;
    }

    /// Set the price type. Prices already entered are kept.
    pub const fn set_price_type(&mut self, price_type: PriceType) {
        self.price_type = price_type;
    }

    /// Set the expiration.
    pub const fn set_expiration(&mut self, expiration: Expiration) {
        self.expiration = expiration;
    }

    // Requirements

    /// Returns true if the ticket needs a limit price.
    #[must_use]
    pub const fn requires_limit_price(&self) -> bool {
        self.requires(OrderField::LimitPrice)
    }

    /// Returns true if the ticket needs a stop price.
    #[must_use]
    pub const fn requires_stop_price(&self) -> bool {
        self.requires(OrderField::StopPrice)
    }

    /// Returns true if the ticket needs an expiration.
    #[must_use]
    pub const fn requires_expiration(&self) -> bool {
        self.requires(OrderField::Expiration)
    }

    /// Returns true if the ticket needs an FX rate.
    #[must_use]
    pub const fn requires_rate(&self) -> bool {
        self.requires(OrderField::Rate)
    }

    const fn requires(&self, field: OrderField) -> bool {
        is_required(&self.kind, self.price_type, field)
    }

    /// Estimated order value for display.
    ///
    /// Equity: price times quantity, where the price is the last quote for
    /// market orders, the limit price for limit and stop limit orders, and
    /// the stop price for stop market orders. FX: rate times amount.
    /// `None` when an operand is unset.
    #[must_use]
    pub fn estimated_change(&self) -> Option<Money> {
        match &self.kind {
            OrderKind::Equity(ticket) => ticket.estimated_change(self.price_type),
            OrderKind::Fx(ticket) => ticket.estimated_change(),
        }
    }

    /// Returns true if the order can be previewed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the order, reporting the first failing field.
    ///
    /// # Errors
    ///
    /// Returns `MissingAccount` if no account is set, otherwise
    /// `InvalidOrder` naming the offending field.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.account.is_none() {
            return Err(OrderError::MissingAccount);
        }

        // Format is left to the broker, which reports it in `error_fields`.
        if self.symbol.as_ref().is_none_or(|symbol| symbol.as_str().is_empty()) {
            return Err(OrderError::invalid("symbol", "Symbol is required"));
        }

        match &self.kind {
            OrderKind::Equity(ticket) => {
                require_positive_quantity("quantity", ticket.quantity)?;
                if self.requires_limit_price() {
                    require_positive_price(OrderField::LimitPrice, ticket.limit_price)?;
                }
                if self.requires_stop_price() {
                    require_positive_price(OrderField::StopPrice, ticket.stop_price)?;
                }
            }
            OrderKind::Fx(ticket) => {
                require_positive_quantity("amount", ticket.amount)?;
                if self.requires_rate() {
                    require_positive_price(OrderField::Rate, ticket.rate)?;
                }
                if ticket.leverage == Some(0) {
                    return Err(OrderError::invalid("leverage", "Leverage must be positive"));
                }
            }
        }

        Ok(())
    }

    /// Build the preview request for this order.
    ///
    /// Prices the price type does not use are left out of the request.
    ///
    /// # Errors
    ///
    /// Returns `MissingAccount` or `InvalidOrder` when validation fails.
    pub fn to_preview_request(&self) -> Result<PreviewRequest, OrderError> {
        self.validate()?;

        let account = self.account.as_ref().ok_or(OrderError::MissingAccount)?;
        let symbol = self
            .symbol
            .clone()
            .ok_or_else(|| OrderError::invalid("symbol", "Symbol is required"))?;

        let order = match &self.kind {
            OrderKind::Equity(ticket) => OrderParams::Equity {
                quantity: ticket.quantity.unwrap_or_default(),
                limit_price: ticket.limit_price.filter(|_| self.requires_limit_price()),
                stop_price: ticket.stop_price.filter(|_| self.requires_stop_price()),
            },
            OrderKind::Fx(ticket) => OrderParams::Fx {
                amount: ticket.amount.unwrap_or_default(),
                rate: ticket.rate.filter(|_| self.requires_rate()),
                leverage: ticket.leverage,
            },
        };

        Ok(PreviewRequest {
            account_number: account.account_number().clone(),
            symbol,
            action: self.action,
            price_type: self.price_type,
            expiration: self.expiration,
            order,
        })
    }
}

fn require_positive_quantity(field: &str, quantity: Option<Quantity>) -> Result<(), OrderError> {
    match quantity {
        Some(q) if q.is_positive() => Ok(()),
        Some(_) => Err(OrderError::invalid(field, "Must be greater than zero")),
        None => Err(OrderError::invalid(field, "Is required")),
    }
}

fn require_positive_price(field: OrderField, price: Option<Money>) -> Result<(), OrderError> {
    match price {
        Some(p) if p.is_positive() => Ok(()),
        Some(_) => Err(OrderError::invalid(field.name(), "Must be greater than zero")),
        None => Err(OrderError::invalid(field.name(), "Is required for this price type")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_ticket::account::LinkedBroker;
    use rust_decimal_macros::dec;

    fn account() -> Arc<LinkedAccount> {
        Arc::new(LinkedAccount::new(
            "ACC-1",
            "Individual",
            Arc::new(LinkedBroker::new("Dummy")),
        ))
    }

    fn equity(ticket: EquityTicket) -> Order {
        Order::new(OrderKind::Equity(ticket))
            .with_account(account())
            .with_symbol("aapl")
    }

    fn valid_market() -> Order {
        equity(EquityTicket::with_quantity(Quantity::from_i64(10)))
    }

    #[test]
    fn new_order_has_defaults() {
        let order = Order::new_equity();
        assert_eq!(order.action(), OrderAction::Buy);
        assert_eq!(order.price_type(), PriceType::Market);
        assert_eq!(order.expiration(), Expiration::GoodForDay);
        assert!(order.account().is_none());
        assert!(order.symbol().is_none());
        assert!(!order.is_valid());
    }

    #[test]
    fn new_equity_with_applies_selections() {
        let order = Order::new_equity_with(
            OrderAction::Sell,
            PriceType::Limit,
            Expiration::GoodUntilCanceled,
        );
        assert_eq!(order.action(), OrderAction::Sell);
        assert_eq!(order.price_type(), PriceType::Limit);
        assert_eq!(order.expiration(), Expiration::GoodUntilCanceled);
    }

    #[test]
    fn requirements_follow_price_type() {
        let mut order = Order::new_equity();

        assert!(!order.requires_limit_price());
        assert!(!order.requires_stop_price());
        assert!(!order.requires_expiration());

        order.set_price_type(PriceType::StopLimit);
        assert!(order.requires_limit_price());
        assert!(order.requires_stop_price());
        assert!(order.requires_expiration());
        assert!(!order.requires_rate());
    }

    #[test]
    fn market_order_is_valid() {
        let order = valid_market();
        assert!(order.is_valid());
        assert_eq!(order.symbol().unwrap().as_str(), "AAPL");
    }

    #[test]
    fn missing_account_is_reported_first() {
        let mut order = Order::new_equity();
        order.set_symbol(None);
        assert_eq!(order.validate(), Err(OrderError::MissingAccount));
    }

    #[test]
    fn missing_symbol_is_invalid() {
        let mut order = valid_market();
        order.set_symbol(None);
        let err = order.validate().unwrap_err();
        assert!(matches!(err, OrderError::InvalidOrder { ref field, .. } if field == "symbol"));
    }

    #[test]
    fn blank_symbol_is_invalid() {
        let mut order = valid_market();
        order.set_symbol(Some(Symbol::new("   ")));
        let err = order.validate().unwrap_err();
        assert!(matches!(err, OrderError::InvalidOrder { ref field, .. } if field == "symbol"));
    }

    #[test]
    fn unusual_symbol_formats_are_left_to_the_broker() {
        for raw in ["^VIX", "BRK B", "A_VERY_LONG_INDEX_SYMBOL_NAME"] {
            let mut order = valid_market();
            order.set_symbol(Some(Symbol::new(raw)));
            assert!(order.is_valid(), "{raw} rejected locally");
        }
    }

    #[test]
    fn zero_quantity_is_invalid() {
        let order = equity(EquityTicket::with_quantity(Quantity::ZERO));
        assert!(!order.is_valid());
    }

    #[test]
    fn limit_order_needs_positive_limit_price() {
        let mut order = valid_market().with_price_type(PriceType::Limit);
        assert!(!order.is_valid());

        order.equity_mut().unwrap().limit_price = Some(Money::ZERO);
        let err = order.validate().unwrap_err();
        assert!(matches!(err, OrderError::InvalidOrder { ref field, .. } if field == "limit_price"));

        order.equity_mut().unwrap().limit_price = Some(Money::new(dec!(150.25)));
        assert!(order.is_valid());
    }

    #[test]
    fn stop_limit_needs_both_prices() {
        let mut order = valid_market().with_price_type(PriceType::StopLimit);
        order.equity_mut().unwrap().limit_price = Some(Money::new(dec!(10)));
        assert!(!order.is_valid());

        order.equity_mut().unwrap().stop_price = Some(Money::new(dec!(9.5)));
        assert!(order.is_valid());
    }

    #[test]
    fn estimated_change_uses_limit_price() {
        let mut order = equity(EquityTicket::with_quantity(Quantity::from_i64(5)))
            .with_price_type(PriceType::Limit);
        let ticket = order.equity_mut().unwrap();
        ticket.limit_price = Some(Money::new(dec!(10.00)));
        ticket.last_quote_price = Some(Money::new(dec!(12.00)));

        assert_eq!(order.estimated_change(), Some(Money::new(dec!(50.00))));
    }

    #[test]
    fn estimated_change_is_none_without_quote() {
        assert_eq!(valid_market().estimated_change(), None);
    }

    #[test]
    fn fx_order_requires_rate_unless_market() {
        let mut order = Order::new(OrderKind::Fx(FxTicket::with_amount(Quantity::from_i64(1000))))
            .with_account(account())
            .with_symbol("eur/usd");
        assert!(order.is_valid());

        order.set_price_type(PriceType::Limit);
        assert!(order.requires_rate());
        assert!(!order.requires_limit_price());
        assert!(!order.is_valid());

        order.fx_mut().unwrap().rate = Some(Money::new(dec!(1.0850)));
        assert!(order.is_valid());
        assert_eq!(order.estimated_change(), Some(Money::new(dec!(1085))));
    }

    #[test]
    fn fx_zero_leverage_is_invalid() {
        let mut order = Order::new(OrderKind::Fx(FxTicket::with_amount(Quantity::from_i64(1000))))
            .with_account(account())
            .with_symbol("EUR/USD");
        order.fx_mut().unwrap().leverage = Some(0);

        let err = order.validate().unwrap_err();
        assert!(matches!(err, OrderError::InvalidOrder { ref field, .. } if field == "leverage"));
    }

    #[test]
    fn preview_request_omits_unused_prices() {
        let mut order = valid_market();
        order.equity_mut().unwrap().limit_price = Some(Money::new(dec!(10)));

        let request = order.to_preview_request().unwrap();
        assert_eq!(request.account_number.as_str(), "ACC-1");
        assert_eq!(request.symbol.as_str(), "AAPL");
        assert_eq!(request.expiration, Expiration::GoodForDay);
        assert_eq!(
            request.order,
            OrderParams::Equity {
                quantity: Quantity::from_i64(10),
                limit_price: None,
                stop_price: None,
            }
        );
        assert_eq!(request.instrument(), InstrumentKind::Equity);
    }

    #[test]
    fn preview_request_fails_for_invalid_order() {
        let order = Order::new_equity().with_account(account());
        assert!(order.to_preview_request().unwrap_err().is_validation());
    }

    #[test]
    fn equity_accessors_do_not_cross_kinds() {
        let mut order = Order::new_fx();
        assert!(order.equity().is_none());
        assert!(order.equity_mut().is_none());
        assert!(order.fx().is_some());
        assert_eq!(order.kind().instrument(), InstrumentKind::Fx);
    }
}
