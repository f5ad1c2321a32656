//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`
///
/// `RUST_LOG` is already folded into `config.filter` by the config loader.
/// An invalid directive falls back to `info`. Calling this more than once
/// is harmless: later calls leave the first subscriber in place.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
