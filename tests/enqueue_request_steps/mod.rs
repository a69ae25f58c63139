//! Step definitions for enqueue request BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
