use crate::models::CommunityId;

use super::{ExportError, KnowledgeBaseError};

/// Result alias used across the workspace.
pub type MimicResult<T> = Result<T, MimicError>;

/// Root error type. Subsystem errors fold in through `From`.
#[derive(Debug, thiserror::Error)]
pub enum MimicError {
    /// The community was never onboarded with `add_guild`.
    #[error("community not found: {community}")]
    NotFound { community: CommunityId },

    /// Publishing to the export service failed.
    #[error("external service error: {0}")]
    ExternalService(#[from] ExportError),

    /// The community's worker stopped answering. Only reachable if the worker
    /// task died; other communities are unaffected.
    #[error("community {community} worker unavailable: {reason}")]
    ConcurrencyViolation {
        community: CommunityId,
        reason: String,
    },

    #[error("knowledge base error: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl MimicError {
    /// Whether retrying the same call later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, MimicError::ExternalService(_))
    }
}
