//! Application Use Cases

mod preview_order;

pub use preview_order::{PendingPlacement, PreviewOrderUseCase, PreviewedOrder};
