//! HTTP-style response returned to the dispatch runtime.

use super::{Origin, RejectionReason};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Status code for an accepted request.
pub const STATUS_ACCEPTED: u16 = 202;
/// Status code for a rejected request.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// Status code for configuration or downstream failures.
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Body message for accepted requests.
pub const ACCEPTED_MESSAGE: &str = "accepted";
/// Body message for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Response headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    /// Always `application/json`.
    #[serde(rename = "Content-Type")]
    pub content_type: String,
    /// The request origin, or `*`.
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,
}

/// Response produced for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// HTTP status code.
    pub status_code: u16,
    /// CORS and content-type headers.
    pub headers: ResponseHeaders,
    /// JSON body of the form `{"message": ...}`.
    pub body: String,
}

impl Response {
    /// Builds a response with the given status and optional error message.
    ///
    /// Without an error message the body reports acceptance.
    ///
    /// # Examples
    ///
    /// ```
    /// use enqueuer::enqueue::domain::{Origin, Response};
    ///
    /// let response = Response::build(&Origin::any(), 202, None);
    /// assert_eq!(response.body, r#"{"message":"accepted"}"#);
    /// assert_eq!(response.headers.allow_origin, "*");
    /// ```
    #[must_use]
    pub fn build(origin: &Origin, status_code: u16, error_message: Option<&str>) -> Self {
        let message = error_message.unwrap_or(ACCEPTED_MESSAGE);
        Self {
            status_code,
            headers: ResponseHeaders {
                content_type: JSON_CONTENT_TYPE.to_owned(),
                allow_origin: origin.as_str().to_owned(),
            },
            body: json!({ "message": message }).to_string(),
        }
    }

    /// 202 response for a published request.
    #[must_use]
    pub fn accepted(origin: &Origin) -> Self {
        Self::build(origin, STATUS_ACCEPTED, None)
    }

    /// 400 response carrying the rejection message.
    #[must_use]
    pub fn rejected(origin: &Origin, reason: RejectionReason) -> Self {
        Self::build(origin, STATUS_BAD_REQUEST, Some(&reason.to_string()))
    }

    /// 500 response with the generic message.
    #[must_use]
    pub fn internal_error(origin: &Origin) -> Self {
        Self::build(
            origin,
            STATUS_INTERNAL_SERVER_ERROR,
            Some(INTERNAL_ERROR_MESSAGE),
        )
    }
}
