//! Then steps for enqueue request BDD scenarios.

use super::world::EnqueueWorld;
use enqueuer::enqueue::domain::Response;
use rstest_bdd_macros::then;
use serde_json::Value;

fn last_response(world: &EnqueueWorld) -> Result<&Response, eyre::Report> {
    world
        .last_response
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no request has been handled in this scenario"))
}

#[then("the response status is {status:u16}")]
fn response_status_is(world: &EnqueueWorld, status: u16) -> Result<(), eyre::Report> {
    let response = last_response(world)?;
    if response.status_code != status {
        return Err(eyre::eyre!(
            "expected status {status}, got {} with body {}",
            response.status_code,
            response.body
        ));
    }
    Ok(())
}

#[then(r#"the response allows origin "{origin}""#)]
fn response_allows_origin(world: &EnqueueWorld, origin: String) -> Result<(), eyre::Report> {
    let response = last_response(world)?;
    if response.headers.allow_origin != origin {
        return Err(eyre::eyre!(
            "expected origin '{origin}', got '{}'",
            response.headers.allow_origin
        ));
    }
    Ok(())
}

#[then(r#"the response message is "{message}""#)]
fn response_message_is(world: &EnqueueWorld, message: String) -> Result<(), eyre::Report> {
    let response = last_response(world)?;
    let body: Value = serde_json::from_str(&response.body)?;
    if body["message"] != message.as_str() {
        return Err(eyre::eyre!("expected message '{message}', got {body}"));
    }
    Ok(())
}

#[then("the number of published messages is {count:usize}")]
fn published_count_is(world: &EnqueueWorld, count: usize) -> Result<(), eyre::Report> {
    let published = world.publisher.published();
    if published.len() != count {
        return Err(eyre::eyre!(
            "expected {count} published messages, found {}",
            published.len()
        ));
    }
    Ok(())
}

#[then(r#"the published message carries user id "{user_id}" and object id "{object_id}""#)]
fn published_message_carries(
    world: &EnqueueWorld,
    user_id: String,
    object_id: String,
) -> Result<(), eyre::Report> {
    let published = world.publisher.published();
    let request = published
        .first()
        .ok_or_else(|| eyre::eyre!("nothing was published"))?;
    let message: Value = serde_json::from_str(&request.message)?;
    if message["userId"] != user_id.as_str() || message["objectId"] != object_id.as_str() {
        return Err(eyre::eyre!("unexpected envelope: {message}"));
    }
    Ok(())
}
