//! Order Ticket Binary
//!
//! Previews an order draft and, when confirmed, places it.
//!
//! # Usage
//!
//! ```bash
//! ORDER_TICKET_ORDER_FILE=order.json cargo run --bin order-ticket
//! ```
//!
//! # Environment Variables
//!
//! ## Required (one of)
//! - `ORDER_TICKET_ORDER_FILE`: JSON order draft to preview
//! - `ORDER_TICKET_STATUS_FILE`: JSON array of order status records to classify
//!
//! ## Optional
//! - `ORDER_TICKET_CONFIG`: Config file path (default: config.yaml, if present)
//! - `ORDER_TICKET_DRY_RUN`: `true` to use the in-memory transport
//! - `ORDER_TICKET_CONFIRM`: `true` to place the order after the preview
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use order_ticket::application::dto::OrderDraftDto;
use order_ticket::config::{Config, load_config};
use order_ticket::infrastructure::transport::{HttpTradeTransport, InMemoryTradeTransport};
use order_ticket::telemetry::init_tracing;
use order_ticket::{
    Order, OrderStatusClassifier, OrderStatusRecord, PreviewOrderUseCase, TicketError,
    TradeTransportPort,
};
use serde::Serialize;

/// Default config file, used only when it exists.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = load_settings()?;
    init_tracing(&config.observability.logging)?;

    let status_file = env_var("ORDER_TICKET_STATUS_FILE");
    let order_file = env_var("ORDER_TICKET_ORDER_FILE");

    if status_file.is_none() && order_file.is_none() {
        bail!("set ORDER_TICKET_ORDER_FILE or ORDER_TICKET_STATUS_FILE");
    }

    if let Some(path) = status_file {
        classify_statuses(&path)?;
    }

    let Some(path) = order_file else {
        return Ok(());
    };

    let order = read_order(&path, &config)?;
    let confirm = env_flag("ORDER_TICKET_CONFIRM");

    if env_flag("ORDER_TICKET_DRY_RUN") {
        tracing::info!("Dry run: using in-memory transport");
        run_ticket(Arc::new(InMemoryTradeTransport::new()), &order, confirm).await
    } else {
        if !config.broker.is_configured() {
            bail!("broker.base_url must be configured unless ORDER_TICKET_DRY_RUN=true");
        }
        let transport = HttpTradeTransport::new(&config.broker.to_transport_config())
            .context("failed to create HTTP transport")?;
        run_ticket(Arc::new(transport), &order, confirm).await
    }
}

/// Load configuration from `ORDER_TICKET_CONFIG`, the default file, or defaults.
fn load_settings() -> Result<Config, TicketError> {
    let config = match env_var("ORDER_TICKET_CONFIG") {
        Some(path) => load_config(Some(&path))?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None)?,
        None => Config::default(),
    };
    Ok(config)
}

fn read_order(path: &str, config: &Config) -> anyhow::Result<Order> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("failed to read order draft {path}"))?;
    let draft: OrderDraftDto = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse order draft {path}"))?;

    let order = draft
        .into_order(config.defaults.into())
        .map_err(TicketError::from)?;
    Ok(order)
}

/// Preview the order, then place it if confirmed.
async fn run_ticket<T>(transport: Arc<T>, order: &Order, confirm: bool) -> anyhow::Result<()>
where
    T: TradeTransportPort,
{
    if let Some(change) = order.estimated_change() {
        tracing::info!(estimated_change = %change, "Estimated change");
    }

    let use_case = PreviewOrderUseCase::new(transport);
    let previewed = use_case.execute(order).await.map_err(report)?;
    let (preview, placement) = previewed.into_parts();
    print_json(&preview)?;

    if !confirm {
        tracing::info!(
            order_id = %placement.order_id(),
            "Preview only; set ORDER_TICKET_CONFIRM=true to place"
        );
        return Ok(());
    }

    let placed = placement.place().await.map_err(report)?;
    print_json(&placed)?;
    Ok(())
}

fn classify_statuses(path: &str) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read status records {path}"))?;
    let records: Vec<OrderStatusRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse status records {path}"))?;

    let summaries: Vec<_> = records.iter().map(OrderStatusClassifier::summarize).collect();
    print_json(&summaries)
}

/// Log a failure with its code and convert it for the binary edge.
fn report(err: impl Into<TicketError>) -> TicketError {
    let err = err.into();
    tracing::error!(
        code = %err.code(),
        context = ?err.context(),
        "{}",
        err.message()
    );
    err
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn env_flag(name: &str) -> bool {
    env_var(name).is_some_and(|value| value.eq_ignore_ascii_case("true") || value == "1")
}
