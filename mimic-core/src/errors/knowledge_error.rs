/// Errors raised while restoring a rendered knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("unparseable knowledge base: {reason}")]
    Malformed { reason: String },

    #[error("unsupported knowledge base version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("knowledge base order {found} does not match configured order {expected}")]
    OrderMismatch { found: usize, expected: usize },

    #[error("invalid transition record: {reason}")]
    InvalidRecord { reason: String },
}
