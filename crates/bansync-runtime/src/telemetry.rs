//! Tracing initialization for the bansync process.
//!
//! The core emits its operational trail (per-target fan-out failures,
//! membership changes) through `tracing`; this module installs the
//! subscriber that renders it.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides `default_filter` when set. Safe to call more
/// than once; later calls are no-ops (tests initialize repeatedly).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
