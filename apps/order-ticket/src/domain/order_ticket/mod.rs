//! Order Ticket Bounded Context
//!
//! Draft equity and FX orders as edited on a brokerage order ticket.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: mutable draft with a tagged equity/FX payload
//! - **Requirements**: which conditional fields the price type asks for
//! - **Linked Account**: the broker account an order is sent to; its broker
//!   keeps the last transport error for relink prompts

pub mod account;
pub mod aggregate;
pub mod errors;
pub mod requests;
pub mod requirements;
pub mod value_objects;

pub use account::{LinkedAccount, LinkedBroker};
pub use aggregate::{EquityTicket, FxTicket, Order, OrderKind};
pub use errors::{OrderError, TransportError};
pub use requests::{InstrumentKind, OrderParams, PlaceRequest, PreviewRequest};
pub use requirements::{OrderField, is_required};
pub use value_objects::{Expiration, OrderAction, PriceType};
