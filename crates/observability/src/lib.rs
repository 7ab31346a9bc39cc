//! Tracing/logging setup shared by the service binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times; subsequent calls become no-ops. Output is
/// JSON lines, filterable via `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
