//! Typed configuration for every Mimic subsystem.
//!
//! All sections default sensibly, so an empty TOML document is a valid config.
//!
//! # Examples
//!
//! ```
//! use mimic_core::config::{MimicConfig, SamplingKind};
//!
//! let config = MimicConfig::from_toml("[chain]\norder = 1\n").unwrap();
//! assert_eq!(config.chain.order, 1);
//! assert_eq!(config.chain.sampling, SamplingKind::FrequencyWeighted);
//! ```

pub mod chain_config;
pub mod commands_config;
pub mod defaults;
pub mod export_config;
pub mod observability_config;
pub mod registry_config;

use serde::{Deserialize, Serialize};

pub use chain_config::{ChainConfig, SamplingKind};
pub use commands_config::{CommandsConfig, GuildTrigger};
pub use export_config::ExportConfig;
pub use observability_config::{LogFormat, ObservabilityConfig};
pub use registry_config::RegistryConfig;

use crate::constants::{MAX_CHAIN_ORDER, MIN_CHAIN_ORDER};
use crate::errors::{MimicError, MimicResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MimicConfig {
    pub chain: ChainConfig,
    pub registry: RegistryConfig,
    pub export: ExportConfig,
    pub observability: ObservabilityConfig,
    pub commands: CommandsConfig,
}

impl MimicConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(input: &str) -> MimicResult<Self> {
        let config: MimicConfig =
            toml::from_str(input).map_err(|e| MimicError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> MimicResult<()> {
        if !(MIN_CHAIN_ORDER..=MAX_CHAIN_ORDER).contains(&self.chain.order) {
            return Err(MimicError::ConfigError(format!(
                "chain.order must be between {MIN_CHAIN_ORDER} and {MAX_CHAIN_ORDER}, got {}",
                self.chain.order
            )));
        }
        if self.chain.max_output_tokens == 0 {
            return Err(MimicError::ConfigError(
                "chain.max_output_tokens must be positive".to_string(),
            ));
        }
        if self.chain.max_output_tokens < self.chain.order {
            return Err(MimicError::ConfigError(format!(
                "chain.max_output_tokens ({}) must be at least chain.order ({})",
                self.chain.max_output_tokens, self.chain.order
            )));
        }
        if self.registry.mailbox_capacity == 0 {
            return Err(MimicError::ConfigError(
                "registry.mailbox_capacity must be positive".to_string(),
            ));
        }
        if self.export.timeout_secs == 0 {
            return Err(MimicError::ConfigError(
                "export.timeout_secs must be positive".to_string(),
            ));
        }
        if self.commands.default_trigger.is_empty() {
            return Err(MimicError::ConfigError(
                "commands.default_trigger cannot be empty".to_string(),
            ));
        }
        if let Some(t) = self.commands.guild_triggers.iter().find(|t| t.trigger.is_empty()) {
            return Err(MimicError::ConfigError(format!(
                "empty command trigger for guild {}",
                t.guild
            )));
        }
        Ok(())
    }
}
