//! Request validation and topic forwarding.
//!
//! An inbound HTTP-style event carries a path identifier, a bearer
//! credential and a JSON body. The handler checks that the three agree,
//! wraps them in an envelope and publishes it to a topic. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
