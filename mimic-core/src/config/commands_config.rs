use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-guild override of the command trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildTrigger {
    pub guild: u64,
    pub trigger: String,
}

/// Command layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Prefix that marks a message as a command when no override exists.
    pub default_trigger: String,
    /// Guild-specific prefixes.
    pub guild_triggers: Vec<GuildTrigger>,
    /// Command names that reply with a "disabled" notice instead of running.
    pub disabled_commands: Vec<String>,
    /// User allowed to prune terms. `None` means nobody.
    pub admin_id: Option<u64>,
    /// Who to contact about pruning, shown to non-admins.
    pub admin_contact: String,
}

impl CommandsConfig {
    /// Trigger prefix for a guild, falling back to the default.
    pub fn trigger_for(&self, guild: u64) -> &str {
        self.guild_triggers
            .iter()
            .find(|t| t.guild == guild)
            .map(|t| t.trigger.as_str())
            .unwrap_or(&self.default_trigger)
    }

    /// Whether a command name is disabled.
    pub fn is_disabled(&self, command: &str) -> bool {
        self.disabled_commands.iter().any(|c| c == command)
    }
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            default_trigger: defaults::DEFAULT_COMMAND_TRIGGER.to_string(),
            guild_triggers: Vec::new(),
            disabled_commands: Vec::new(),
            admin_id: None,
            admin_contact: defaults::DEFAULT_ADMIN_CONTACT.to_string(),
        }
    }
}
