//! Logging setup for Loam binaries.
//!
//! Library crates emit events through the `tracing` macros; this crate
//! installs the subscriber that renders them. Filtering follows `RUST_LOG`
//! when set, otherwise an explicit level override, otherwise `info`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber.
///
/// `level` overrides the default filter (e.g. `"debug"` or
/// `"loam_worldgen=trace"`); the `RUST_LOG` environment variable wins over
/// both. Call once at startup; a second call would panic, so tests should
/// use their own subscribers.
pub fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_FILTER)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .init();
}

/// The filter used when neither `RUST_LOG` nor an override is present.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
