//! Shared world state for enqueue request BDD scenarios.

use std::sync::Arc;

use enqueuer::enqueue::{
    adapters::memory::InMemoryTopicPublisher,
    domain::{EnqueueSettings, InboundEvent, Response},
    services::EnqueueHandler,
};
use rstest::fixture;
use serde_json::{Map, Value};

/// Scenario world for enqueue request behaviour tests.
pub struct EnqueueWorld {
    /// Settings the handler is built from.
    pub settings: EnqueueSettings,
    /// Topic the handler publishes to.
    pub publisher: Arc<InMemoryTopicPublisher>,
    /// Event under construction.
    pub event: InboundEvent,
    /// Payload serialised into the event body when the request is handled.
    pub payload: Map<String, Value>,
    /// Response to the last handled request.
    pub last_response: Option<Response>,
}

impl EnqueueWorld {
    /// Creates a world with an accepting topic and an empty event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: EnqueueSettings::default(),
            publisher: Arc::new(InMemoryTopicPublisher::new()),
            event: InboundEvent::new(),
            payload: Map::new(),
            last_response: None,
        }
    }

    /// Builds a handler over the current settings and topic.
    #[must_use]
    pub fn handler(&self) -> EnqueueHandler<InMemoryTopicPublisher> {
        EnqueueHandler::new(self.settings.clone(), Arc::clone(&self.publisher))
    }
}

impl Default for EnqueueWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> EnqueueWorld {
    EnqueueWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
