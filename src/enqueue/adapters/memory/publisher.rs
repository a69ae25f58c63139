//! In-memory topic publisher for tests and local replay.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::enqueue::ports::{
    PublishError, PublishReceipt, PublishRequest, PublishResult, TopicPublisher,
};

/// Thread-safe in-memory publisher that records every accepted request.
///
/// A publisher primed with [`InMemoryTopicPublisher::failing`] rejects every
/// call with the given message and records nothing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTopicPublisher {
    state: Arc<RwLock<InMemoryTopicState>>,
}

#[derive(Debug, Default)]
struct InMemoryTopicState {
    published: Vec<PublishRequest>,
    failure: Option<String>,
}

impl InMemoryTopicPublisher {
    /// Creates a publisher that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher that rejects every message with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        let publisher = Self::new();
        publisher.fail_with(message);
        publisher
    }

    /// Makes subsequent publishes fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        state.failure = Some(message.into());
    }

    /// Returns every request accepted so far, oldest first.
    #[must_use]
    pub fn published(&self) -> Vec<PublishRequest> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .published
            .clone()
    }
}

#[async_trait]
impl TopicPublisher for InMemoryTopicPublisher {
    async fn publish(&self, request: &PublishRequest) -> PublishResult<PublishReceipt> {
        let mut state = self.state.write().map_err(|err| {
            PublishError::transport(std::io::Error::other(err.to_string()))
        })?;

        if let Some(message) = &state.failure {
            return Err(PublishError::rejected(message.clone()));
        }

        state.published.push(request.clone());
        Ok(PublishReceipt {
            message_id: Some(Uuid::new_v4().to_string()),
        })
    }
}
