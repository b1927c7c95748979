//! HTTP sink for hastebin-compatible services.

use std::time::Duration;

use mimic_core::config::ExportConfig;
use mimic_core::{ExportError, IExportSink};
use tracing::debug;

use crate::protocol::{DocumentCreated, DOCUMENTS_PATH};

/// Longest error body kept in an [`ExportError::Status`].
const MAX_ERROR_BODY: usize = 256;

/// Publishes text as a hastebin document.
#[derive(Debug, Clone)]
pub struct HastebinSink {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HastebinSink {
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| ExportError::Network {
                reason: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, e: reqwest::Error) -> ExportError {
        if e.is_timeout() {
            ExportError::Timeout {
                after_secs: self.timeout.as_secs(),
            }
        } else {
            ExportError::Network {
                reason: e.to_string(),
            }
        }
    }
}

impl IExportSink for HastebinSink {
    async fn publish(&self, text: String) -> Result<String, ExportError> {
        let url = format!("{}{}", self.base_url, DOCUMENTS_PATH);
        debug!(%url, bytes = text.len(), "hastebin: uploading");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(text)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(ExportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let created: DocumentCreated = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                ExportError::MalformedResponse {
                    reason: e.to_string(),
                }
            }
        })?;
        if created.key.is_empty() {
            return Err(ExportError::MalformedResponse {
                reason: "empty document key".to_string(),
            });
        }
        Ok(format!("{}/{}", self.base_url, created.key))
    }

    fn name(&self) -> &str {
        "hastebin"
    }
}
