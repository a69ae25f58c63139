//! Request validator combining the individual rules in precedence order.

use crate::enqueue::{
    domain::{FieldNaming, HandlerConfig, InboundEvent, Origin, RejectionReason, ValidatedRequest},
    validation::rules,
};
use tracing::error;

const ORIGIN_HEADER: &str = "Origin";

/// Validates inbound events against one invocation's configuration.
///
/// Checks run strictly in this order and stop at the first failure:
///
/// 1. credential present
/// 2. object id path parameter present
/// 3. body parses to a truthy JSON value
/// 4. payload object id matches the path (configurable naming only)
/// 5. payload auth token matches the credential (configurable naming only)
///
/// Every rejection is logged at error level using its exact message.
///
/// # Examples
///
/// ```
/// use enqueuer::enqueue::domain::{EnqueueSettings, HandlerConfig, InboundEvent, RejectionReason};
/// use enqueuer::enqueue::validation::RequestValidator;
///
/// let settings = EnqueueSettings::default()
///     .with_topic_arn("topic_arn")
///     .with_region("us-west-2")
///     .with_auth_token_field("authTokenField")
///     .with_object_id_field("objectIdField");
/// let config = HandlerConfig::resolve(&settings).expect("complete settings");
///
/// let event = InboundEvent::new()
///     .with_header("Authorization", "Bearer KEY")
///     .with_body("{}");
/// let result = RequestValidator::new(&config).validate(&event);
/// assert_eq!(result.err(), Some(RejectionReason::MissingObjectId));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator<'a> {
    config: &'a HandlerConfig,
}

impl<'a> RequestValidator<'a> {
    /// Creates a validator for the given configuration.
    #[must_use]
    pub const fn new(config: &'a HandlerConfig) -> Self {
        Self { config }
    }

    /// Extracts the origin used for CORS, defaulting to `*`.
    ///
    /// Origin is never validated, so this succeeds for every event.
    #[must_use]
    pub fn origin(event: &InboundEvent) -> Origin {
        Origin::from_header(event.header(ORIGIN_HEADER))
    }

    /// Validates the event.
    ///
    /// # Errors
    ///
    /// Returns the first [`RejectionReason`] encountered.
    pub fn validate(&self, event: &InboundEvent) -> Result<ValidatedRequest, RejectionReason> {
        self.check(event).inspect_err(|reason| {
            error!(reason = ?reason, "{reason}");
        })
    }

    fn check(&self, event: &InboundEvent) -> Result<ValidatedRequest, RejectionReason> {
        let naming = self.config.naming();
        let credential = rules::extract_credential(event)?;
        let object_id = rules::extract_object_id(event, naming.object_id_field())?;
        let payload = rules::parse_payload(event)?;

        if let FieldNaming::Configurable {
            auth_token_field,
            object_id_field,
        } = naming
        {
            rules::check_object_id_matches(&payload, object_id_field, &object_id)?;
            rules::check_credential_matches(&payload, auth_token_field, &credential)?;
        }

        Ok(ValidatedRequest::new(
            credential,
            Self::origin(event),
            object_id,
            payload,
        ))
    }
}
