//! Order Status Value Objects

mod order_status;
mod status_category;
mod status_order_type;

pub use order_status::OrderStatus;
pub use status_category::StatusCategory;
pub use status_order_type::StatusOrderType;
