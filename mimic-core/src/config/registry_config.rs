use serde::{Deserialize, Serialize};

use super::defaults;

/// Model registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Pending operations a single community may queue before senders wait.
    pub mailbox_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: defaults::DEFAULT_MAILBOX_CAPACITY,
        }
    }
}
