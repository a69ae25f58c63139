//! Error types for configuration resolution and request validation.

use thiserror::Error;

/// Errors returned while resolving handler configuration.
///
/// These represent deployment defects rather than caller errors and always
/// surface to callers as a generic internal error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required settings are absent or empty.
    #[error("missing required settings: {}", .0.join(", "))]
    MissingSettings(Vec<&'static str>),

    /// The field-naming mode is not recognised.
    #[error("unknown field naming mode: {0}")]
    UnknownNamingMode(String),
}

/// Reason a request was rejected by validation.
///
/// The `Display` text of each variant is the exact message returned to the
/// caller and written to the error log.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RejectionReason {
    /// The `Authorization` header is absent or empty.
    #[error("missing authorization header")]
    MissingCredential,

    /// The object id path parameter is absent or empty.
    #[error("missing required path parameter")]
    MissingObjectId,

    /// The body is not JSON or parses to a falsy value.
    #[error("payload is not valid JSON")]
    InvalidPayload,

    /// The path parameter differs from the payload's object id field.
    #[error("path parameter does not match corresponding payload field")]
    ObjectIdMismatch,

    /// The credential differs from the payload's auth token field.
    #[error("auth token does not match corresponding payload field")]
    CredentialMismatch,
}

/// Error returned when an envelope cannot be serialised.
#[derive(Debug, Error)]
#[error("failed to serialise envelope: {0}")]
pub struct EnvelopeError(#[from] pub serde_json::Error);
