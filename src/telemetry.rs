//! Structured logging setup.
//!
//! Installs a JSON `tracing-subscriber` formatter filtered by `RUST_LOG`,
//! defaulting to `info`. The handler itself only emits events through the
//! `tracing` macros; installing a subscriber is left to the binary.

use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

const DEFAULT_FILTER: &str = "info";

/// Installs the global JSON subscriber writing to `writer`.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is kept.
#[must_use]
pub fn init_tracing<W>(writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_current_span(false)
        .with_writer(writer)
        .try_init()
        .is_ok()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
