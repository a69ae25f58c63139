//! Service layer sequencing one enqueue invocation.
//!
//! Provides [`EnqueueHandler`], which resolves configuration, validates the
//! event, builds the envelope, publishes it and shapes the response.

use crate::enqueue::{
    domain::{
        ConfigError, EnqueueSettings, Envelope, EnvelopeError, HandlerConfig, InboundEvent,
        RejectionReason, Response,
    },
    ports::{PublishError, PublishRequest, TopicPublisher},
    validation::RequestValidator,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Log message written when configuration cannot be resolved.
pub const MISCONFIGURED_MESSAGE: &str = "lambda is not properly configured";

/// Reasons an invocation did not end in a published envelope.
#[derive(Debug, Error)]
pub enum EnqueueError {
    /// Configuration is incomplete or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The request failed validation.
    #[error(transparent)]
    Rejected(#[from] RejectionReason),
    /// The envelope could not be serialised.
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    /// The topic publish failed.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Result type for enqueue service operations.
pub type EnqueueResult<T> = Result<T, EnqueueError>;

/// Request validation and forwarding orchestration service.
///
/// Settings are captured once and injected; configuration is resolved from
/// them on every invocation so a misconfigured deployment answers each
/// request with a 500 instead of failing to start.
#[derive(Clone)]
pub struct EnqueueHandler<P>
where
    P: TopicPublisher,
{
    settings: EnqueueSettings,
    publisher: Arc<P>,
}

impl<P> EnqueueHandler<P>
where
    P: TopicPublisher,
{
    /// Creates a new handler.
    #[must_use]
    pub const fn new(settings: EnqueueSettings, publisher: Arc<P>) -> Self {
        Self {
            settings,
            publisher,
        }
    }

    /// Returns the injected settings.
    #[must_use]
    pub const fn settings(&self) -> &EnqueueSettings {
        &self.settings
    }

    /// Handles one inbound event and always produces a response.
    ///
    /// Responses are 202 on publish, 400 with the rejection message on a
    /// validation failure, and 500 with a generic message on configuration,
    /// serialisation or publish failure.
    pub async fn handle(&self, event: &InboundEvent) -> Response {
        info!(event = %event.to_log_string(), "received enqueue request");
        let origin = RequestValidator::origin(event);

        match self.forward(event).await {
            Ok(topic_arn) => {
                info!(topic = %topic_arn, "envelope published");
                Response::accepted(&origin)
            }
            Err(EnqueueError::Rejected(reason)) => Response::rejected(&origin, reason),
            Err(err) => {
                log_internal_failure(&err);
                Response::internal_error(&origin)
            }
        }
    }

    /// Validates the event and publishes its envelope.
    ///
    /// Returns the topic the envelope was published to.
    ///
    /// # Errors
    ///
    /// Returns [`EnqueueError`] describing the first step that failed.
    pub async fn forward(&self, event: &InboundEvent) -> EnqueueResult<String> {
        let config = HandlerConfig::resolve(&self.settings)?;
        let request = RequestValidator::new(&config).validate(event)?;
        let message = Envelope::build(&request, config.naming()).to_json()?;
        let publish = PublishRequest::new(config.topic_arn(), message);
        self.publisher.publish(&publish).await?;
        Ok(publish.topic_arn)
    }
}

fn log_internal_failure(err: &EnqueueError) {
    match err {
        EnqueueError::Config(cause) => error!(cause = %cause, "{MISCONFIGURED_MESSAGE}"),
        EnqueueError::Publish(cause) => error!("{cause}"),
        EnqueueError::Envelope(cause) => error!("{cause}"),
        // Already logged by the validator.
        EnqueueError::Rejected(_) => {}
    }
}
