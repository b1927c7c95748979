// Single source of truth for all default values.

// --- Chain ---
pub const DEFAULT_CHAIN_ORDER: usize = 2;
pub const DEFAULT_MAX_OUTPUT_TOKENS: usize = 32;
pub const DEFAULT_RETAIN_CORPUS: bool = true;
pub const DEFAULT_MAX_CORPUS_MESSAGES: usize = 10_000;

// --- Registry ---
pub const DEFAULT_MAILBOX_CAPACITY: usize = 256;

// --- Export ---
pub const DEFAULT_EXPORT_BASE_URL: &str = "https://hastebin.com";
pub const DEFAULT_EXPORT_TIMEOUT_SECS: u64 = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Commands ---
pub const DEFAULT_COMMAND_TRIGGER: &str = "!";
pub const DEFAULT_ADMIN_CONTACT: &str = "the bot owner";
