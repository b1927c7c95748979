//! Subscriber installation.

pub mod spans;

use mimic_core::config::{LogFormat, ObservabilityConfig};
use mimic_core::{MimicError, MimicResult};
use tracing_subscriber::EnvFilter;

/// Parse the configured level or directive list. `RUST_LOG`, when set,
/// takes precedence.
pub fn build_filter(config: &ObservabilityConfig) -> MimicResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level).map_err(|e| {
        MimicError::ConfigError(format!(
            "invalid observability.log_level {:?}: {e}",
            config.log_level
        ))
    })
}

/// Install the global subscriber. Fails if the filter is invalid or a
/// subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> MimicResult<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| MimicError::ConfigError(format!("tracing init failed: {e}")))
}
