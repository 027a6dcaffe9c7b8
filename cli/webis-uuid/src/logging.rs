//! Logging initialization for the CLI.
//!
//! Logs go to stderr; stdout carries only the UUID.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Initialize logging to stderr.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_filter(filter);

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
