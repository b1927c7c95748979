/// Paste-hosting export errors. All of them are transient from the caller's
/// point of view; the sink never retries.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("export service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed export response: {reason}")]
    MalformedResponse { reason: String },
}
