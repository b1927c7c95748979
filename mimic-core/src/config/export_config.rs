use serde::{Deserialize, Serialize};

use super::defaults;

/// Paste-hosting export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Base URL of a hastebin-compatible service, without trailing slash.
    pub base_url: String,
    /// Whole-request timeout for a publish call, in seconds.
    pub timeout_secs: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_EXPORT_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_EXPORT_TIMEOUT_SECS,
        }
    }
}
