//! Diagnostic tracing for the changelog tool.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`. They are kept
//! apart from command output on stdout (the created-entry notice or the
//! `--dry-run` document).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Events are written
/// to stderr in compact form, without timestamps or targets.
///
/// # Example
/// ```bash
/// RUST_LOG=changelog=debug changelog --dry-run -t "Fix parser" -c fixed
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact();

    tracing_subscriber::registry().with(filter).with(layer).init();
}
