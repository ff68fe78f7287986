//! Diagnostic logging setup
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with command output on stdout.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// The filter comes from `RUST_LOG`; without it only warnings are shown,
/// or debug output when `debug` is set.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
