//! Domain model for request validation and envelope forwarding.
//!
//! Every value here is built fresh per invocation and is immutable once
//! constructed. Nothing in the domain touches the environment, the network
//! or the logger.

mod config;
pub mod envelope;
mod error;
mod event;
mod request;
pub mod response;

pub use config::{
    AUTH_TOKEN_FIELD_VAR, EnqueueSettings, FIELD_NAMING_MODE_VAR, FIXED_OBJECT_ID_KEY,
    FIXED_USER_ID_KEY, FieldNaming, HandlerConfig, NamingMode, OBJECT_ID_FIELD_VAR, REGION_VAR,
    TOPIC_ARN_VAR,
};
pub use envelope::Envelope;
pub use error::{ConfigError, EnvelopeError, RejectionReason};
pub use event::InboundEvent;
pub use request::{Credential, ObjectId, Origin, ValidatedRequest};
pub use response::{Response, ResponseHeaders};
