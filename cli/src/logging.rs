//! Tracing init for the binary: fmt subscriber filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Safe to call once at startup; a second
/// init (e.g. in tests) is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
