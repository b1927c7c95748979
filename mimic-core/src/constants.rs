/// Mimic system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest supported chain order (context length).
pub const MIN_CHAIN_ORDER: usize = 1;

/// Largest supported chain order (context length).
pub const MAX_CHAIN_ORDER: usize = 2;

/// Format version written into every rendered knowledge base.
pub const KNOWLEDGE_BASE_VERSION: u32 = 1;

/// Reply sent when generation cannot continue from the requested seed.
pub const EMPTY_GENERATION_REPLY: &str = "I can't :(";

/// Reply sent when a disabled command is invoked.
pub const DISABLED_COMMAND_REPLY: &str = "That command is disabled!";
