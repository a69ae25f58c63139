//! When steps for enqueue request BDD scenarios.

use super::world::{EnqueueWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use serde_json::Value;

#[when("the request is handled")]
fn handle_request(world: &mut EnqueueWorld) -> Result<(), eyre::Report> {
    let body = serde_json::to_string(&Value::Object(world.payload.clone()))
        .wrap_err("serialise scenario payload")?;
    let event = world.event.clone().with_body(body);
    let response = run_async(world.handler().handle(&event));
    world.last_response = Some(response);
    Ok(())
}
