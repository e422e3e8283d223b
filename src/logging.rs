//! Logging initialization.
//!
//! Diagnostics go to stderr so stdout carries only the report. The level is
//! controlled by the `RUST_LOG` environment variable, falling back to `warn`, or
//! `debug` when `--verbose` is given:
//! - `RUST_LOG=debug` - Every skipped history line with its reason
//! - `RUST_LOG=info` - Parse summary only
//! - `RUST_LOG=warn` - Warnings and errors only (default)

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer =
        fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false);

    if let Err(e) = tracing_subscriber::registry().with(env_filter).with(stderr_layer).try_init()
    {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}
