// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Ticket - Rust Core Library
//!
//! Order model behind a brokerage order ticket, and the classifier behind
//! its order list.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `order_ticket`: Order aggregate (equity and FX), field requirements,
//!     validation, estimated change, linked accounts
//!   - `order_status`: Status classification of single and group orders
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `TradeTransportPort`, the brokerage API seam
//!   - `use_cases`: `PreviewOrder`, yielding a single-use placement
//!   - `dto`: Order drafts read from JSON
//!
//! - **Infrastructure**: Adapters
//!   - `transport::http`: brokerage EMS JSON API over `reqwest`
//!   - `transport::in_memory`: scripted transport for tests and dry runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Ambient
// =============================================================================

/// YAML configuration with environment interpolation.
pub mod config;

/// Coded errors for the binary boundary.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::order_status::{
    OrderStatus, OrderStatusClassifier, OrderStatusRecord, StatusCategory, StatusOrderType,
    StatusSummary,
};
pub use domain::order_ticket::{
    Expiration, LinkedAccount, LinkedBroker, Order, OrderAction, OrderError, OrderKind,
    PriceType, TransportError,
};

// Application re-exports
pub use application::ports::{PlaceResult, PreviewResult, TradeTransportPort};
pub use application::use_cases::{PendingPlacement, PreviewOrderUseCase, PreviewedOrder};

// Ambient re-exports
pub use config::{Config, ConfigError, load_config};
pub use error::{ErrorCode, TicketError};
