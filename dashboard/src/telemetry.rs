//! Tracing subscriber installation.
//!
//! Frames go to stdout, so structured logs are written as JSON to stderr.
//! Verbosity follows `RUST_LOG` and defaults to `warn`.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber.
///
/// Failure to install, for example because a subscriber already exists, is
/// reported and otherwise ignored.
pub fn init() {
    if let Err(error) = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
