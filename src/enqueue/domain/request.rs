//! Values extracted from an inbound event and the validated request.

use serde_json::Value;
use std::fmt;

const BEARER_PREFIX: &str = "Bearer ";
const ANY_ORIGIN: &str = "*";

/// Bearer credential taken from the `Authorization` header.
///
/// Treated as an opaque string and only ever compared for equality.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Derives a credential from a raw `Authorization` header value.
    ///
    /// The value is trimmed and the first `"Bearer "` occurrence removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use enqueuer::enqueue::domain::Credential;
    ///
    /// assert_eq!(Credential::from_header(" Bearer KEY ").as_str(), "KEY");
    /// assert_eq!(Credential::from_header("KEY").as_str(), "KEY");
    /// ```
    #[must_use]
    pub fn from_header(raw: &str) -> Self {
        Self(raw.trim().replacen(BEARER_PREFIX, "", 1))
    }

    /// Returns the credential as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Request origin echoed back in the CORS response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    /// Uses the supplied header value, or `*` when none was sent.
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        Self(value.unwrap_or(ANY_ORIGIN).to_owned())
    }

    /// Returns the wildcard origin.
    #[must_use]
    pub fn any() -> Self {
        Self(ANY_ORIGIN.to_owned())
    }

    /// Returns the origin as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied object identifier taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wraps a path parameter value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request that passed every validation check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    credential: Credential,
    origin: Origin,
    object_id: ObjectId,
    payload: Value,
}

impl ValidatedRequest {
    /// Bundles the validated parts of a request.
    #[must_use]
    pub const fn new(
        credential: Credential,
        origin: Origin,
        object_id: ObjectId,
        payload: Value,
    ) -> Self {
        Self {
            credential,
            origin,
            object_id,
            payload,
        }
    }

    /// Returns the bearer credential.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the request origin.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Returns the object identifier.
    #[must_use]
    pub const fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    /// Returns the parsed payload.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }
}
