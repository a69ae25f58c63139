//! Enqueuer: request validation and topic forwarding.
//!
//! This crate receives HTTP-style events carrying a path identifier, a bearer
//! credential and a JSON body, checks that they agree, and forwards a
//! normalised envelope to a publish/subscribe topic for asynchronous
//! processing.
//!
//! # Architecture
//!
//! Enqueuer follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and validation rules with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`enqueue`]: Validation, envelope construction and the handler service
//! - [`telemetry`]: Structured logging setup

pub mod enqueue;
pub mod telemetry;
