//! Order Lifecycle Integration Tests
//!
//! Drafts flow from JSON fixtures through validation, preview and place
//! against the in-memory transport:
//! - Equity limit order, preview then place
//! - FX limit order routed to the FX endpoint family
//! - Local failures that never reach the transport
//! - Transport failures recorded on the linked broker

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;
use std::sync::Arc;

use order_ticket::application::dto::{DraftDefaults, OrderDraftDto};
use order_ticket::domain::order_ticket::{InstrumentKind, OrderParams};
use order_ticket::domain::shared::{Money, Quantity, Symbol};
use order_ticket::infrastructure::transport::InMemoryTradeTransport;
use order_ticket::{
    Expiration, LinkedAccount, LinkedBroker, Order, OrderError, PreviewOrderUseCase, PriceType,
    TransportError,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Load an order draft fixture and convert it with default selections.
fn load_order(name: &str) -> Order {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);

    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()));
    let draft: OrderDraftDto = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {e}", path.display()));

    draft
        .into_order(DraftDefaults::default())
        .unwrap_or_else(|e| panic!("Invalid fixture {}: {e}", path.display()))
}

fn account() -> Arc<LinkedAccount> {
    Arc::new(LinkedAccount::new(
        "ACC-1",
        "Individual",
        Arc::new(LinkedBroker::new("Dummy")),
    ))
}

// ============================================
// Preview → Place
// ============================================

#[tokio::test]
async fn test_equity_fixture_previews_and_places() {
    let order = load_order("equity_limit_order.json");
    assert!(order.is_valid());
    assert_eq!(order.symbol().map(Symbol::as_str), Some("AAPL"));
    assert_eq!(order.expiration(), Expiration::GoodUntilCanceled);
    // Limit orders estimate from the limit price, not the last quote.
    assert_eq!(order.estimated_change(), Some(Money::new(dec!(50))));

    let transport = Arc::new(InMemoryTradeTransport::new());
    let use_case = PreviewOrderUseCase::new(Arc::clone(&transport));

    let previewed = use_case.execute(&order).await.expect("preview succeeds");
    let (preview, placement) = previewed.into_parts();
    assert_eq!(placement.order_id(), &preview.order_id);

    let placed = placement.place().await.expect("place succeeds");
    assert!(placed.confirmation_message.contains(preview.order_id.as_str()));

    let previews = transport.preview_requests();
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].account_number.as_str(), "ACC-1001");
    assert_eq!(
        previews[0].order,
        OrderParams::Equity {
            quantity: Quantity::from_i64(5),
            limit_price: Some(Money::new(dec!(10))),
            stop_price: None,
        }
    );

    let places = transport.place_requests();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].order_id, preview.order_id);
    assert_eq!(places[0].instrument, InstrumentKind::Equity);
}

#[tokio::test]
async fn test_fx_fixture_places_as_fx() {
    let order = load_order("fx_limit_order.json");
    assert!(order.requires_rate());
    assert_eq!(order.estimated_change(), Some(Money::new(dec!(1085))));

    let transport = Arc::new(InMemoryTradeTransport::new());
    let use_case = PreviewOrderUseCase::new(Arc::clone(&transport));

    let (_, placement) = use_case.execute(&order).await.unwrap().into_parts();
    placement.place().await.unwrap();

    let previews = transport.preview_requests();
    assert_eq!(previews[0].instrument(), InstrumentKind::Fx);
    assert_eq!(previews[0].symbol.as_str(), "EUR/USD");
    assert_eq!(transport.place_requests()[0].instrument, InstrumentKind::Fx);
}

#[tokio::test]
async fn test_each_preview_yields_its_own_placement() {
    let mut order = Order::new_equity()
        .with_account(account())
        .with_symbol("MSFT");
    order.equity_mut().unwrap().quantity = Some(Quantity::from_i64(1));

    let transport = Arc::new(InMemoryTradeTransport::new());
    let use_case = PreviewOrderUseCase::new(Arc::clone(&transport));

    let first = use_case.execute(&order).await.unwrap();
    let second = use_case.execute(&order).await.unwrap();
    assert_ne!(first.preview.order_id, second.preview.order_id);

    second.placement.place().await.unwrap();

    let places = transport.place_requests();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].order_id, second.preview.order_id);
}

// ============================================
// Failures
// ============================================

#[tokio::test]
async fn test_missing_account_never_reaches_transport() {
    let mut order = Order::new_equity().with_symbol("AAPL");
    order.equity_mut().unwrap().quantity = Some(Quantity::from_i64(10));

    let transport = Arc::new(InMemoryTradeTransport::new());
    let use_case = PreviewOrderUseCase::new(Arc::clone(&transport));

    let err = use_case.execute(&order).await.unwrap_err();
    assert_eq!(err, OrderError::MissingAccount);
    assert!(err.is_validation());
    assert!(transport.preview_requests().is_empty());
}

#[tokio::test]
async fn test_invalid_order_never_reaches_transport() {
    let mut order = Order::new_equity()
        .with_account(account())
        .with_symbol("AAPL")
        .with_price_type(PriceType::StopLimit);
    let ticket = order.equity_mut().unwrap();
    ticket.quantity = Some(Quantity::from_i64(10));
    ticket.limit_price = Some(Money::new(dec!(101)));

    let transport = Arc::new(InMemoryTradeTransport::new());
    let use_case = PreviewOrderUseCase::new(Arc::clone(&transport));

    let Err(OrderError::InvalidOrder { field, .. }) = use_case.execute(&order).await else {
        panic!("expected invalid order");
    };
    assert_eq!(field, "stop_price");
    assert!(transport.preview_requests().is_empty());
}

#[tokio::test]
async fn test_preview_failure_is_recorded_on_broker() {
    let account = account();
    let mut order = Order::new_equity()
        .with_account(Arc::clone(&account))
        .with_symbol("AAPL");
    order.equity_mut().unwrap().quantity = Some(Quantity::from_i64(10));

    let transport = Arc::new(InMemoryTradeTransport::new());
    transport.fail_next_preview(TransportError::SessionExpired {
        message: "Session expired, please relink".to_string(),
    });
    let use_case = PreviewOrderUseCase::new(Arc::clone(&transport));

    let err = use_case.execute(&order).await.unwrap_err();
    assert!(!err.is_validation());
    assert!(err.transport().is_some_and(TransportError::requires_reauthentication));
    assert!(account.broker().needs_relink());

    // No retry: exactly one request went out.
    assert_eq!(transport.preview_requests().len(), 1);
}

#[tokio::test]
async fn test_place_failure_is_surfaced_once() {
    let mut order = Order::new_equity()
        .with_account(account())
        .with_symbol("AAPL");
    order.equity_mut().unwrap().quantity = Some(Quantity::from_i64(10));

    let transport = Arc::new(InMemoryTradeTransport::new());
    transport.fail_next_place(TransportError::Rejected {
        message: "Insufficient buying power".to_string(),
        error_fields: vec!["quantity".to_string()],
    });
    let use_case = PreviewOrderUseCase::new(Arc::clone(&transport));

    let previewed = use_case.execute(&order).await.unwrap();
    let err = previewed.placement.place().await.unwrap_err();

    assert_eq!(
        err.transport().map(TransportError::error_fields),
        Some(&["quantity".to_string()][..])
    );
    assert_eq!(transport.place_requests().len(), 1);
    assert!(order.account().unwrap().broker().last_error().is_none());
}

#[test]
fn test_huge_valid_order_estimates_none() {
    let order = build_order(
        true,
        Some("AAPL"),
        PriceType::Limit,
        Some(1_000_000_000_000_000_000),
        Some(1_000_000_000_000),
        None,
    );

    assert!(order.is_valid());
    assert_eq!(order.estimated_change(), None);
}

#[test]
fn test_odd_symbol_is_left_to_broker() {
    for raw in ["^VIX", "BRK B"] {
        let order = build_order(true, Some(raw), PriceType::Market, Some(1), None, None);
        assert!(order.is_valid(), "{raw} rejected locally");
    }
}

// ============================================
// Validation Properties
// ============================================

fn price_type_strategy() -> impl Strategy<Value = PriceType> {
    prop::sample::select(PriceType::ALL.to_vec())
}

fn amount_strategy() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(-5i64..500)
}

fn build_order(
    with_account: bool,
    symbol: Option<&str>,
    price_type: PriceType,
    quantity: Option<i64>,
    limit_price: Option<i64>,
    stop_price: Option<i64>,
) -> Order {
    let mut order = Order::new_equity().with_price_type(price_type);
    if with_account {
        order.set_account(Some(account()));
    }
    order.set_symbol(symbol.map(Symbol::new));

    let ticket = order.equity_mut().unwrap();
    ticket.quantity = quantity.map(Quantity::from_i64);
    ticket.limit_price = limit_price.map(|p| Money::new(Decimal::from(p)));
    ticket.stop_price = stop_price.map(|p| Money::new(Decimal::from(p)));
    order
}

proptest! {
    #[test]
    fn prop_filling_a_missing_field_keeps_valid_orders_valid(
        with_account in any::<bool>(),
        has_symbol in any::<bool>(),
        price_type in price_type_strategy(),
        quantity in amount_strategy(),
        limit_price in amount_strategy(),
        stop_price in amount_strategy(),
    ) {
        let symbol = has_symbol.then_some("AAPL");
        let base = build_order(with_account, symbol, price_type, quantity, limit_price, stop_price);
        let was_valid = base.is_valid();

        let variants = [
            build_order(true, symbol, price_type, quantity, limit_price, stop_price),
            build_order(with_account, symbol.or(Some("MSFT")), price_type, quantity, limit_price, stop_price),
            build_order(with_account, symbol, price_type, quantity.or(Some(1)), limit_price, stop_price),
            build_order(with_account, symbol, price_type, quantity, limit_price.or(Some(25)), stop_price),
            build_order(with_account, symbol, price_type, quantity, limit_price, stop_price.or(Some(20))),
        ];

        if was_valid {
            for variant in &variants {
                prop_assert!(variant.is_valid());
            }
        }
    }

    #[test]
    fn prop_non_positive_quantity_is_never_valid(
        price_type in price_type_strategy(),
        quantity in -100i64..=0,
    ) {
        let order = build_order(true, Some("AAPL"), price_type, Some(quantity), Some(10), Some(10));
        prop_assert!(!order.is_valid());
    }

    #[test]
    fn prop_estimated_change_never_panics(
        price_type in price_type_strategy(),
        quantity in 1i64..=i64::MAX,
        limit_price in 1i64..=i64::MAX,
        stop_price in 1i64..=i64::MAX,
    ) {
        let order = build_order(
            true,
            Some("AAPL"),
            price_type,
            Some(quantity),
            Some(limit_price),
            Some(stop_price),
        );
        prop_assert!(order.is_valid());

        // Market orders have no quote here, so only priced types estimate.
        if let Some(change) = order.estimated_change() {
            prop_assert!(change.is_positive());
        }
    }

    #[test]
    fn prop_complete_positive_order_is_valid(
        price_type in price_type_strategy(),
        quantity in 1i64..10_000,
        limit_price in 1i64..10_000,
        stop_price in 1i64..10_000,
    ) {
        let order = build_order(
            true,
            Some("AAPL"),
            price_type,
            Some(quantity),
            Some(limit_price),
            Some(stop_price),
        );
        prop_assert!(order.is_valid());
    }
}
