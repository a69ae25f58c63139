//! Port contracts for the enqueue handler.
//!
//! Ports define infrastructure-agnostic interfaces used by the handler
//! service.

pub mod publisher;

pub use publisher::{PublishError, PublishReceipt, PublishRequest, PublishResult, TopicPublisher};
