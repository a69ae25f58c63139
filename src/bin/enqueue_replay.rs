//! Replays a recorded inbound event through the enqueue handler.
//!
//! Usage:
//!
//! ```text
//! enqueue_replay <event-path>
//! ```
//!
//! Settings are read from the environment (`TOPIC_ARN`, `REGION`,
//! `AUTH_TOKEN_FIELD`, `OBJECT_ID_FIELD`, `FIELD_NAMING_MODE`). The event is
//! handled against an in-memory topic, and the response together with every
//! published message is written to stdout as JSON:
//!
//! ```json
//! {
//!   "response": { "statusCode": 202, "headers": { ... }, "body": "..." },
//!   "published": [ { "TopicArn": "...", "Message": "..." } ]
//! }
//! ```
//!
//! Logs go to stderr as JSON lines, filtered by `RUST_LOG`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use enqueuer::{
    enqueue::{
        adapters::memory::InMemoryTopicPublisher,
        domain::{EnqueueSettings, InboundEvent, Response},
        ports::PublishRequest,
        services::EnqueueHandler,
    },
    telemetry,
};
use serde::Serialize;
use std::{env, io::Write, sync::Arc};
use thiserror::Error;
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while replaying an event.
#[derive(Debug, Error)]
enum ReplayError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read event file: {0}")]
    EventRead(#[source] std::io::Error),
    #[error("failed to parse event file: {0}")]
    EventParse(#[source] serde_json::Error),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to write report: {0}")]
    Output(#[source] BoxError),
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    response: Response,
    published: Vec<PublishRequest>,
}

fn main() -> Result<(), BoxError> {
    let _installed = telemetry::init_tracing(std::io::stderr);
    let args = collect_args()?;
    let event_path = parse_args(args.into_iter())?;
    let event = load_event(&event_path)?;
    let report = replay(EnqueueSettings::from_env(), &event)?;
    write_report(&mut std::io::stdout().lock(), &report)?;
    Ok(())
}

fn collect_args() -> Result<Vec<Utf8PathBuf>, ReplayError> {
    env::args_os()
        .map(|arg_os| {
            let arg = arg_os
                .into_string()
                .map_err(|_| ReplayError::InvalidArgs("argument is not valid UTF-8".into()))?;
            Ok(Utf8PathBuf::from(arg))
        })
        .collect()
}

fn parse_args(mut args: impl Iterator<Item = Utf8PathBuf>) -> Result<Utf8PathBuf, ReplayError> {
    let _program = args.next();
    let event_path = args
        .next()
        .ok_or_else(|| ReplayError::InvalidArgs("missing event path argument".into()))?;
    if let Some(extra) = args.next() {
        return Err(ReplayError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok(event_path)
}

fn load_event(path: &Utf8Path) -> Result<InboundEvent, ReplayError> {
    let raw = read_event_file(path)?;
    serde_json::from_str(&raw).map_err(ReplayError::EventParse)
}

fn read_event_file(path: &Utf8Path) -> Result<String, ReplayError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ReplayError::InvalidArgs(format!("'{path}' does not name a file")))?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(ReplayError::EventRead)?;
    dir.read_to_string(file_name).map_err(ReplayError::EventRead)
}

fn replay(settings: EnqueueSettings, event: &InboundEvent) -> Result<ReplayReport, ReplayError> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ReplayError::RuntimeInit)?;
    let publisher = Arc::new(InMemoryTopicPublisher::new());
    let handler = EnqueueHandler::new(settings, Arc::clone(&publisher));
    let response = runtime.block_on(handler.handle(event));
    Ok(ReplayReport {
        response,
        published: publisher.published(),
    })
}

fn write_report(out: &mut impl Write, report: &ReplayReport) -> Result<(), ReplayError> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(|err| ReplayError::Output(err.into()))?;
    writeln!(out).map_err(|err| ReplayError::Output(err.into()))
}
