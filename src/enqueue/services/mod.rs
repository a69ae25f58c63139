//! Application services for request validation and forwarding.

mod handler;

pub use handler::{EnqueueError, EnqueueHandler, EnqueueResult, MISCONFIGURED_MESSAGE};
