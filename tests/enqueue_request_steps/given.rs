//! Given steps for enqueue request BDD scenarios.

use super::world::EnqueueWorld;
use enqueuer::enqueue::domain::{EnqueueSettings, InboundEvent, NamingMode};
use rstest_bdd_macros::given;
use serde_json::Value;

const AUTH_TOKEN_FIELD: &str = "authTokenField";
const OBJECT_ID_FIELD: &str = "objectIdField";

fn base_settings() -> EnqueueSettings {
    EnqueueSettings::default()
        .with_topic_arn("topic_arn")
        .with_region("us-west-2")
        .with_object_id_field(OBJECT_ID_FIELD)
}

#[given("a handler configured with configurable field names")]
fn configurable_handler(world: &mut EnqueueWorld) {
    world.settings = base_settings()
        .with_auth_token_field(AUTH_TOKEN_FIELD)
        .with_naming_mode(NamingMode::Configurable);
}

#[given("a handler configured with fixed field names")]
fn fixed_handler(world: &mut EnqueueWorld) {
    world.settings = base_settings().with_naming_mode(NamingMode::Fixed);
}

#[given(r#"the topic rejects messages with "{message}""#)]
fn topic_rejects(world: &mut EnqueueWorld, message: String) {
    world.publisher.fail_with(message);
}

#[given(r#"a request for object "{object_id}" with bearer token "{token}" from origin "{origin}""#)]
fn request_for_object(world: &mut EnqueueWorld, object_id: String, token: String, origin: String) {
    world.event = InboundEvent::new()
        .with_header("Authorization", format!("Bearer {token}"))
        .with_header("Origin", origin)
        .with_path_parameter(OBJECT_ID_FIELD, object_id.clone());
    world.payload.insert(AUTH_TOKEN_FIELD.to_owned(), Value::String(token));
    world
        .payload
        .insert(OBJECT_ID_FIELD.to_owned(), Value::String(object_id));
}

#[given(r#"the payload names object "{object_id}""#)]
fn payload_names_object(world: &mut EnqueueWorld, object_id: String) {
    world
        .payload
        .insert(OBJECT_ID_FIELD.to_owned(), Value::String(object_id));
}
