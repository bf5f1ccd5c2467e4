//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for use case inputs at the binary boundary.

mod order_draft_dto;

pub use order_draft_dto::{DraftDefaults, OrderDraftDto};
