//! Application Ports
//!
//! Driven ports used by the use cases.

mod trade_transport_port;

pub use trade_transport_port::{
    OrderDetails, PlaceRequest, PlaceResult, PreviewRequest, PreviewResult, TradeTransportPort,
    TransportError,
};
