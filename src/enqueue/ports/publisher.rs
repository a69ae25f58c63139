//! Publish port for forwarding envelopes to a topic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// A single publish call: the target topic and the serialised message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishRequest {
    /// Topic identifier.
    pub topic_arn: String,
    /// Serialised envelope.
    pub message: String,
}

impl PublishRequest {
    /// Creates a publish request.
    #[must_use]
    pub fn new(topic_arn: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            message: message.into(),
        }
    }
}

/// Acknowledgement returned by a successful publish.
///
/// Callers in this crate do not inspect it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishReceipt {
    /// Identifier assigned by the topic, when it provides one.
    pub message_id: Option<String>,
}

/// Topic publish contract.
///
/// This is the only point where the handler reaches an external system.
#[async_trait]
pub trait TopicPublisher: Send + Sync {
    /// Publishes one message to a topic.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] when the topic rejects the message or the
    /// transport fails.
    async fn publish(&self, request: &PublishRequest) -> PublishResult<PublishReceipt>;
}

/// Errors returned by topic publisher implementations.
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    /// The topic rejected the message.
    #[error("{0}")]
    Rejected(String),

    /// The transport failed before the topic answered.
    #[error("{0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl PublishError {
    /// Creates a rejection carrying the topic's message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
