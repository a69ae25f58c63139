//! Inbound HTTP-style event as delivered by the dispatch runtime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An inbound request event.
///
/// Only `headers`, `pathParameters` and `body` are interpreted. Any other
/// fields the runtime supplies are retained so the whole event can be logged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default)]
    headers: Option<HashMap<String, String>>,
    #[serde(default)]
    path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    body: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl InboundEvent {
    /// Creates an empty event with no headers, path parameters or body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds a path parameter.
    #[must_use]
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Sets the raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Removes a header by exact name.
    #[must_use]
    pub fn without_header(mut self, name: &str) -> Self {
        if let Some(headers) = self.headers.as_mut() {
            headers.remove(name);
        }
        self
    }

    /// Removes a path parameter by exact name.
    #[must_use]
    pub fn without_path_parameter(mut self, name: &str) -> Self {
        if let Some(params) = self.path_parameters.as_mut() {
            params.remove(name);
        }
        self
    }

    /// Looks up a header value, ignoring ASCII case.
    ///
    /// An exact-case match is preferred. Empty values are treated as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use enqueuer::enqueue::domain::InboundEvent;
    ///
    /// let event = InboundEvent::new().with_header("origin", "https://example.com");
    /// assert_eq!(event.header("Origin"), Some("https://example.com"));
    /// assert_eq!(event.header("Authorization"), None);
    /// ```
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let headers = self.headers.as_ref()?;
        headers
            .get(name)
            .filter(|value| !value.is_empty())
            .or_else(|| {
                headers
                    .iter()
                    .filter(|(key, value)| key.eq_ignore_ascii_case(name) && !value.is_empty())
                    .map(|(_, value)| value)
                    .min()
            })
            .map(String::as_str)
    }

    /// Looks up a non-empty path parameter by exact name.
    #[must_use]
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()?
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns the raw body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Serialises the whole event for logging.
    #[must_use]
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("<unserialisable event: {err}>"))
    }
}
