use std::future::Future;

use crate::errors::ExportError;

/// Destination for rendered knowledge bases.
pub trait IExportSink: Send + Sync {
    /// Publish `text` and return a URL referencing it. Implementations make a
    /// single attempt; retry policy belongs to the caller.
    fn publish(&self, text: String) -> impl Future<Output = Result<String, ExportError>> + Send;

    /// Human-readable sink name, used in logs.
    fn name(&self) -> &str;
}
