//! Logging setup.
//!
//! The library only emits `tracing` events. Binaries and tests that want to
//! see them call [`init_logging`] once; `RUST_LOG` takes precedence over the
//! configured level.

use crate::config::{LoggingConfig, Settings};
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init_logging`].
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a global fmt subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// [`init_logging`] with the settings' debug flag applied.
pub fn init_from_settings(settings: &Settings) -> bool {
    init_logging(&settings.effective_logging())
}
