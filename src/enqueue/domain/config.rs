//! Handler settings and the validated configuration resolved from them.
//!
//! [`EnqueueSettings`] is an immutable snapshot of the environment taken once
//! at process start. [`HandlerConfig::resolve`] turns that snapshot into a
//! validated configuration for a single invocation; a missing value is fatal
//! for the invocation rather than for any individual field.

use super::ConfigError;
use std::fmt;

/// Environment variable holding the publish topic identifier.
pub const TOPIC_ARN_VAR: &str = "TOPIC_ARN";
/// Environment variable holding the publish region.
pub const REGION_VAR: &str = "REGION";
/// Environment variable naming the payload field that carries the auth token.
pub const AUTH_TOKEN_FIELD_VAR: &str = "AUTH_TOKEN_FIELD";
/// Environment variable naming the path parameter and payload field that
/// carry the object identifier.
pub const OBJECT_ID_FIELD_VAR: &str = "OBJECT_ID_FIELD";
/// Environment variable selecting the field-naming mode.
pub const FIELD_NAMING_MODE_VAR: &str = "FIELD_NAMING_MODE";

/// Envelope key used for the credential in fixed naming mode.
pub const FIXED_USER_ID_KEY: &str = "userId";
/// Envelope key used for the object identifier in fixed naming mode.
pub const FIXED_OBJECT_ID_KEY: &str = "objectId";

/// Which of the two field-naming schemes a deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingMode {
    /// Payload and envelope keys are taken from configuration, and the
    /// payload must echo the path parameter and credential.
    #[default]
    Configurable,
    /// Envelope keys are fixed to `userId`/`objectId` and no cross-field
    /// checks are made.
    Fixed,
}

impl NamingMode {
    /// Parses a `FIELD_NAMING_MODE` value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownNamingMode`] for anything other than
    /// `configurable` or `fixed` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "configurable" => Ok(Self::Configurable),
            "fixed" => Ok(Self::Fixed),
            _ => Err(ConfigError::UnknownNamingMode(value.to_owned())),
        }
    }

    /// Returns the canonical lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configurable => "configurable",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for NamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw settings captured from the environment.
///
/// Every field is optional; validation happens in [`HandlerConfig::resolve`].
/// Empty strings are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnqueueSettings {
    topic_arn: Option<String>,
    region: Option<String>,
    auth_token_field: Option<String>,
    object_id_field: Option<String>,
    naming_mode: Option<String>,
}

impl EnqueueSettings {
    /// Captures settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Captures settings through an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use enqueuer::enqueue::domain::EnqueueSettings;
    ///
    /// let settings = EnqueueSettings::from_lookup(|key| match key {
    ///     "TOPIC_ARN" => Some("topic_arn".to_owned()),
    ///     _ => None,
    /// });
    /// assert_eq!(settings.topic_arn(), Some("topic_arn"));
    /// assert_eq!(settings.region(), None);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            topic_arn: read(TOPIC_ARN_VAR),
            region: read(REGION_VAR),
            auth_token_field: read(AUTH_TOKEN_FIELD_VAR),
            object_id_field: read(OBJECT_ID_FIELD_VAR),
            naming_mode: read(FIELD_NAMING_MODE_VAR),
        }
    }

    /// Sets the topic identifier.
    #[must_use]
    pub fn with_topic_arn(mut self, value: impl Into<String>) -> Self {
        self.topic_arn = non_empty(value.into());
        self
    }

    /// Sets the region.
    #[must_use]
    pub fn with_region(mut self, value: impl Into<String>) -> Self {
        self.region = non_empty(value.into());
        self
    }

    /// Sets the payload field carrying the auth token.
    #[must_use]
    pub fn with_auth_token_field(mut self, value: impl Into<String>) -> Self {
        self.auth_token_field = non_empty(value.into());
        self
    }

    /// Sets the path parameter and payload field carrying the object id.
    #[must_use]
    pub fn with_object_id_field(mut self, value: impl Into<String>) -> Self {
        self.object_id_field = non_empty(value.into());
        self
    }

    /// Sets the field-naming mode.
    #[must_use]
    pub fn with_naming_mode(mut self, mode: NamingMode) -> Self {
        self.naming_mode = Some(mode.as_str().to_owned());
        self
    }

    /// Returns the configured topic identifier.
    #[must_use]
    pub fn topic_arn(&self) -> Option<&str> {
        self.topic_arn.as_deref()
    }

    /// Returns the configured region.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Field naming in effect for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldNaming {
    /// Payload and envelope keys come from configuration.
    Configurable {
        /// Payload and envelope key carrying the credential.
        auth_token_field: String,
        /// Path parameter, payload and envelope key carrying the object id.
        object_id_field: String,
    },
    /// Envelope keys are `userId` and `objectId`.
    Fixed {
        /// Path parameter key carrying the object id.
        object_id_field: String,
    },
}

impl FieldNaming {
    /// Returns the path parameter key that carries the object id.
    #[must_use]
    pub fn object_id_field(&self) -> &str {
        match self {
            Self::Configurable {
                object_id_field, ..
            }
            | Self::Fixed { object_id_field } => object_id_field,
        }
    }

    /// Returns the active naming mode.
    #[must_use]
    pub const fn mode(&self) -> NamingMode {
        match self {
            Self::Configurable { .. } => NamingMode::Configurable,
            Self::Fixed { .. } => NamingMode::Fixed,
        }
    }
}

/// Validated configuration for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    topic_arn: String,
    region: Option<String>,
    naming: FieldNaming,
}

impl HandlerConfig {
    /// Resolves a validated configuration from raw settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownNamingMode`] when the naming mode is not
    /// recognised, or [`ConfigError::MissingSettings`] listing every required
    /// setting that is absent for the selected mode. Configurable naming
    /// needs the topic, region and both field names; fixed naming needs only
    /// the topic and the object id field name.
    pub fn resolve(settings: &EnqueueSettings) -> Result<Self, ConfigError> {
        let mode = settings
            .naming_mode
            .as_deref()
            .map_or(Ok(NamingMode::default()), NamingMode::parse)?;

        let mut missing = Vec::new();
        let mut require = |value: &Option<String>, name: &'static str| {
            if value.is_none() {
                missing.push(name);
            }
            value.clone().unwrap_or_default()
        };

        let topic_arn = require(&settings.topic_arn, TOPIC_ARN_VAR);
        let (region, auth_token_field) = match mode {
            NamingMode::Configurable => {
                let region = require(&settings.region, REGION_VAR);
                let token_field = require(&settings.auth_token_field, AUTH_TOKEN_FIELD_VAR);
                (Some(region), Some(token_field))
            }
            NamingMode::Fixed => (settings.region.clone(), None),
        };
        let object_id_field = require(&settings.object_id_field, OBJECT_ID_FIELD_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::MissingSettings(missing));
        }

        let naming = match auth_token_field {
            Some(token_field) => FieldNaming::Configurable {
                auth_token_field: token_field,
                object_id_field,
            },
            None => FieldNaming::Fixed { object_id_field },
        };

        Ok(Self {
            topic_arn,
            region,
            naming,
        })
    }

    /// Returns the publish topic identifier.
    #[must_use]
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    /// Returns the publish region, which fixed naming may leave unset.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the field naming in effect.
    #[must_use]
    pub const fn naming(&self) -> &FieldNaming {
        &self.naming
    }
}
