//! Outbound message envelope forwarded to the publish topic.

use super::{
    EnvelopeError, FieldNaming, ValidatedRequest,
    config::{FIXED_OBJECT_ID_KEY, FIXED_USER_ID_KEY},
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

const PAYLOAD_KEY: &str = "payload";

/// Message envelope in one of the two supported shapes.
///
/// Keys serialise in declaration order: credential, object id, payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Keys are taken from configuration.
    Configurable {
        /// Key carrying the credential.
        token_field: String,
        /// Key carrying the object id.
        id_field: String,
        /// Bearer credential.
        credential: String,
        /// Object identifier from the path.
        object_id: String,
        /// Parsed request payload.
        payload: Value,
    },
    /// Keys are `userId`, `objectId` and `payload`.
    Fixed {
        /// Bearer credential.
        user_id: String,
        /// Object identifier from the path.
        object_id: String,
        /// Parsed request payload.
        payload: Value,
    },
}

impl Envelope {
    /// Builds the envelope for a validated request.
    ///
    /// # Examples
    ///
    /// ```
    /// use enqueuer::enqueue::domain::{
    ///     Credential, Envelope, FieldNaming, ObjectId, Origin, ValidatedRequest,
    /// };
    /// use serde_json::json;
    ///
    /// let request = ValidatedRequest::new(
    ///     Credential::from_header("Bearer KEY"),
    ///     Origin::any(),
    ///     ObjectId::new("42"),
    ///     json!({"id": "42"}),
    /// );
    /// let naming = FieldNaming::Fixed { object_id_field: "id".to_owned() };
    /// let json = Envelope::build(&request, &naming).to_json().expect("serialises");
    /// assert_eq!(json, r#"{"userId":"KEY","objectId":"42","payload":{"id":"42"}}"#);
    /// ```
    #[must_use]
    pub fn build(request: &ValidatedRequest, naming: &FieldNaming) -> Self {
        let credential = request.credential().as_str().to_owned();
        let object_id = request.object_id().as_str().to_owned();
        let payload = request.payload().clone();
        match naming {
            FieldNaming::Configurable {
                auth_token_field,
                object_id_field,
            } => Self::Configurable {
                token_field: auth_token_field.clone(),
                id_field: object_id_field.clone(),
                credential,
                object_id,
                payload,
            },
            FieldNaming::Fixed { .. } => Self::Fixed {
                user_id: credential,
                object_id,
                payload,
            },
        }
    }

    /// Serialises the envelope to its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError`] if JSON serialisation fails.
    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        Ok(serde_json::to_string(self)?)
    }

    fn entries(&self) -> Vec<(&str, Value)> {
        let (token_key, token, id_key, id, payload) = match self {
            Self::Configurable {
                token_field,
                id_field,
                credential,
                object_id,
                payload,
            } => (
                token_field.as_str(),
                credential,
                id_field.as_str(),
                object_id,
                payload,
            ),
            Self::Fixed {
                user_id,
                object_id,
                payload,
            } => (
                FIXED_USER_ID_KEY,
                user_id,
                FIXED_OBJECT_ID_KEY,
                object_id,
                payload,
            ),
        };

        let mut entries: Vec<(&str, Value)> = Vec::with_capacity(3);
        for (key, value) in [
            (token_key, Value::String(token.clone())),
            (id_key, Value::String(id.clone())),
            (PAYLOAD_KEY, payload.clone()),
        ] {
            // A repeated key keeps its first position and takes the later value.
            match entries.iter_mut().find(|entry| entry.0 == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        entries
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
