//! Validation of inbound events.
//!
//! Validation is fail-fast: the first failing rule determines the only
//! reported [`RejectionReason`](crate::enqueue::domain::RejectionReason).

pub mod rules;
pub mod service;

pub use service::RequestValidator;
