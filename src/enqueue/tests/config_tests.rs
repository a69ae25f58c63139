//! Unit tests for settings capture and configuration resolution.

use super::fixtures::{configurable_settings, fixed_settings};
use crate::enqueue::domain::{
    ConfigError, EnqueueSettings, FieldNaming, HandlerConfig, NamingMode,
};
use rstest::rstest;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    move |key| values.get(key).cloned()
}

#[rstest]
fn configurable_settings_resolve(configurable_settings: EnqueueSettings) {
    let config = HandlerConfig::resolve(&configurable_settings).expect("settings are complete");

    assert_eq!(config.topic_arn(), "topic_arn");
    assert_eq!(config.region(), Some("us-west-2"));
    assert_eq!(
        config.naming(),
        &FieldNaming::Configurable {
            auth_token_field: "authTokenField".to_owned(),
            object_id_field: "objectIdField".to_owned(),
        }
    );
}

#[rstest]
fn fixed_settings_do_not_need_auth_token_field(fixed_settings: EnqueueSettings) {
    let config = HandlerConfig::resolve(&fixed_settings).expect("settings are complete");

    assert_eq!(config.naming().mode(), NamingMode::Fixed);
    assert_eq!(config.naming().object_id_field(), "objectIdField");
}

#[test]
fn empty_settings_report_every_missing_value() {
    let result = HandlerConfig::resolve(&EnqueueSettings::default());

    assert_eq!(
        result,
        Err(ConfigError::MissingSettings(vec![
            "TOPIC_ARN",
            "REGION",
            "AUTH_TOKEN_FIELD",
            "OBJECT_ID_FIELD",
        ]))
    );
}

#[test]
fn fixed_mode_reports_only_its_own_requirements() {
    let settings = EnqueueSettings::default().with_naming_mode(NamingMode::Fixed);

    let result = HandlerConfig::resolve(&settings);

    assert_eq!(
        result,
        Err(ConfigError::MissingSettings(vec![
            "TOPIC_ARN",
            "OBJECT_ID_FIELD",
        ]))
    );
}

#[test]
fn fixed_mode_resolves_without_region() {
    let settings = EnqueueSettings::default()
        .with_topic_arn("topic_arn")
        .with_object_id_field("objectIdField")
        .with_naming_mode(NamingMode::Fixed);

    let config = HandlerConfig::resolve(&settings).expect("fixed naming needs no region");

    assert_eq!(config.region(), None);
    assert_eq!(
        config.naming(),
        &FieldNaming::Fixed {
            object_id_field: "objectIdField".to_owned(),
        }
    );
}

#[rstest]
#[case::topic("TOPIC_ARN")]
#[case::region("REGION")]
#[case::auth_token_field("AUTH_TOKEN_FIELD")]
#[case::object_id_field("OBJECT_ID_FIELD")]
fn any_single_missing_value_invalidates_configuration(#[case] absent: &'static str) {
    let all = [
        ("TOPIC_ARN", "topic_arn"),
        ("REGION", "us-west-2"),
        ("AUTH_TOKEN_FIELD", "authTokenField"),
        ("OBJECT_ID_FIELD", "objectIdField"),
    ];
    let present: Vec<_> = all.into_iter().filter(|(key, _)| *key != absent).collect();
    let settings = EnqueueSettings::from_lookup(lookup_from(&present));

    let result = HandlerConfig::resolve(&settings);

    assert_eq!(
        result,
        Err(ConfigError::MissingSettings(vec![absent]))
    );
}

#[test]
fn empty_values_count_as_absent() {
    let settings = EnqueueSettings::from_lookup(lookup_from(&[
        ("TOPIC_ARN", ""),
        ("REGION", "us-west-2"),
        ("AUTH_TOKEN_FIELD", "authTokenField"),
        ("OBJECT_ID_FIELD", "objectIdField"),
    ]));

    assert_eq!(settings.topic_arn(), None);
    assert_eq!(
        HandlerConfig::resolve(&settings),
        Err(ConfigError::MissingSettings(vec!["TOPIC_ARN"]))
    );
}

#[rstest]
#[case("configurable", NamingMode::Configurable)]
#[case("fixed", NamingMode::Fixed)]
#[case(" Fixed ", NamingMode::Fixed)]
fn naming_mode_parses_known_values(#[case] raw: &str, #[case] expected: NamingMode) {
    assert_eq!(NamingMode::parse(raw), Ok(expected));
}

#[test]
fn unknown_naming_mode_invalidates_configuration() {
    let settings = EnqueueSettings::from_lookup(lookup_from(&[
        ("TOPIC_ARN", "topic_arn"),
        ("REGION", "us-west-2"),
        ("AUTH_TOKEN_FIELD", "authTokenField"),
        ("OBJECT_ID_FIELD", "objectIdField"),
        ("FIELD_NAMING_MODE", "dynamic"),
    ]));

    assert_eq!(
        HandlerConfig::resolve(&settings),
        Err(ConfigError::UnknownNamingMode("dynamic".to_owned()))
    );
}

#[test]
fn missing_settings_error_lists_names() {
    let err = ConfigError::MissingSettings(vec!["TOPIC_ARN", "REGION"]);
    assert_eq!(err.to_string(), "missing required settings: TOPIC_ARN, REGION");
}
