//! Wire types of the hastebin document API.

use serde::{Deserialize, Serialize};

/// Path the raw document body is POSTed to, relative to the base URL.
pub const DOCUMENTS_PATH: &str = "/documents";

/// Response to a document upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCreated {
    /// Document key; the public URL is `{base_url}/{key}`.
    pub key: String,
}
