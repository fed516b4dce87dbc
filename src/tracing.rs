//! Logging setup for the `sidedock` binary
//!
//! The library only emits events; a host embedding [`crate::DockWidget`]
//! installs its own subscriber. Useful targets with `RUST_LOG`:
//! - `sidedock::drag=trace` follows hover targets and where each drag ended
//! - `sidedock::deferred=trace` shows every queued next-tick task
//! - `sidedock::model::side_bar=trace` logs bar inserts and removals
//! - `sidedock::model::splitter=debug` reports maximize and restore
//! - `sidedock::state=info` reports how many snapshot entries applied
//!
//! The console layer writes to stderr since the CLI prints the final
//! [`crate::DockState`] on stdout. A second layer always records debug
//! events to `<config dir>/logs/sidedock.log`, rotated daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). Console output goes to
/// stderr so snapshots printed on stdout stay clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "sidedock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
