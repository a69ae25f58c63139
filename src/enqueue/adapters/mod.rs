//! Adapter implementations for enqueue ports.

pub mod memory;
