//! # mimic-core
//!
//! Foundation crate for the Mimic chat engine.
//! Defines the shared types, errors, config, traits, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MimicConfig;
pub use errors::{ExportError, KnowledgeBaseError, MimicError, MimicResult};
pub use models::{ChainStats, CommunityId, KnowledgeBase, TransitionRecord};
pub use traits::IExportSink;
