//! Tracing subscriber bootstrap

use proptyos_domain::{LoggingConfig, ProptyError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
///
/// # Errors
/// Returns `ProptyError::Config` when the configured directive is malformed.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| ProptyError::Config(format!("Invalid log filter '{}': {e}", config.level)))
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns `ProptyError::Config` when the filter is malformed or a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    installed
        .map_err(|e| ProptyError::Config(format!("Failed to install tracing subscriber: {e}")))?;
    tracing::debug!(level = %config.level, json = config.json, "Logging initialised");
    Ok(())
}
