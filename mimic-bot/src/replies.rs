//! Reply texts sent back to the channel.

pub use mimic_core::constants::{DISABLED_COMMAND_REPLY, EMPTY_GENERATION_REPLY};

/// Sent when the paste service could not take the knowledge base.
pub const EXPORT_FAILED_REPLY: &str = "Couldn't upload my knowledge base right now, try again later.";

pub fn removed(term: &str, count: u64) -> String {
    format!("Removed \"{term}\" from {count} lines")
}

pub fn knowledge_base(url: &str) -> String {
    format!("Here's my knowledge base: {url}")
}

pub fn contact_admin(contact: &str) -> String {
    format!("Contact {contact} if you believe terms should be removed.")
}
