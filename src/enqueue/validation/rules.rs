//! Individual validation rules.
//!
//! Each rule inspects one aspect of the inbound event and returns the
//! matching [`RejectionReason`] on failure.

use crate::enqueue::domain::{Credential, InboundEvent, ObjectId, RejectionReason};
use serde_json::Value;

const AUTHORIZATION_HEADER: &str = "Authorization";

/// Extracts the bearer credential.
///
/// # Errors
///
/// Returns [`RejectionReason::MissingCredential`] when no non-empty
/// `Authorization` header is present.
pub fn extract_credential(event: &InboundEvent) -> Result<Credential, RejectionReason> {
    event
        .header(AUTHORIZATION_HEADER)
        .map(Credential::from_header)
        .ok_or(RejectionReason::MissingCredential)
}

/// Extracts the object id from the path parameters.
///
/// # Errors
///
/// Returns [`RejectionReason::MissingObjectId`] when the parameter is absent
/// or empty.
pub fn extract_object_id(
    event: &InboundEvent,
    object_id_field: &str,
) -> Result<ObjectId, RejectionReason> {
    event
        .path_parameter(object_id_field)
        .map(ObjectId::new)
        .ok_or(RejectionReason::MissingObjectId)
}

/// Parses the body into a JSON payload.
///
/// # Errors
///
/// Returns [`RejectionReason::InvalidPayload`] when the body is absent, is not
/// JSON, or parses to a falsy value.
pub fn parse_payload(event: &InboundEvent) -> Result<Value, RejectionReason> {
    let body = event.body().ok_or(RejectionReason::InvalidPayload)?;
    // Numbers outside the f64 range, such as `1e400`, fail to parse.
    let payload: Value =
        serde_json::from_str(body).map_err(|_| RejectionReason::InvalidPayload)?;
    if is_falsy(&payload) {
        return Err(RejectionReason::InvalidPayload);
    }
    Ok(payload)
}

/// Checks that the payload echoes the path parameter.
///
/// # Errors
///
/// Returns [`RejectionReason::ObjectIdMismatch`] unless
/// `payload[object_id_field]` is a string equal to the object id. Only object
/// payloads can match: arrays are never indexed by a numeric field name, so
/// `["42"]` with field `"0"` is a mismatch.
pub fn check_object_id_matches(
    payload: &Value,
    object_id_field: &str,
    object_id: &ObjectId,
) -> Result<(), RejectionReason> {
    if string_field(payload, object_id_field) == Some(object_id.as_str()) {
        Ok(())
    } else {
        Err(RejectionReason::ObjectIdMismatch)
    }
}

/// Checks that the payload echoes the credential.
///
/// # Errors
///
/// Returns [`RejectionReason::CredentialMismatch`] unless
/// `payload[auth_token_field]` is a string equal to the credential.
pub fn check_credential_matches(
    payload: &Value,
    auth_token_field: &str,
    credential: &Credential,
) -> Result<(), RejectionReason> {
    if string_field(payload, auth_token_field) == Some(credential.as_str()) {
        Ok(())
    } else {
        Err(RejectionReason::CredentialMismatch)
    }
}

fn string_field<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload.get(field).and_then(Value::as_str)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
