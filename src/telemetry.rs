//! Tracing initialization for binaries and integration harnesses embedding
//! the core. The library itself only emits events; it never installs a
//! subscriber on its own.

use tracing_subscriber::EnvFilter;

use crate::config;

/// Install the global tracing subscriber, honoring RUST_LOG when set.
///
/// Safe to call once per process; subsequent calls are ignored rather than
/// panicking so test harnesses can call it from every test.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}
