//! Shared fixtures for Mimic tests: deterministic configs, sample corpora, and
//! in-memory export sinks.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use mimic_core::config::{ChainConfig, MimicConfig};
use mimic_core::{ExportError, IExportSink};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// A recorded conversation for one community.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusFixture {
    pub community: u64,
    pub messages: Vec<String>,
}

/// The small mixed-case corpus, including blank messages.
pub fn small_talk() -> CorpusFixture {
    load_fixture("corpus/small_talk.json")
}

/// Chain config with a fixed RNG seed.
pub fn chain_config(order: usize) -> ChainConfig {
    ChainConfig {
        order,
        rng_seed: Some(0x5eed),
        ..ChainConfig::default()
    }
}

/// Full config with a fixed RNG seed and a small mailbox, so tests exercise
/// backpressure.
pub fn mimic_config(order: usize) -> MimicConfig {
    let mut config = MimicConfig::default();
    config.chain = chain_config(order);
    config.registry.mailbox_capacity = 8;
    config
}

/// Owned seed tokens from string literals.
pub fn seed(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Sink that keeps every published text and hands out sequential URLs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    published: Mutex<Vec<String>>,
    counter: AtomicUsize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts published so far, oldest first.
    pub fn published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }
}

impl IExportSink for RecordingSink {
    async fn publish(&self, text: String) -> Result<String, ExportError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.published.lock().unwrap().push(text);
        Ok(format!("https://paste.test/{n}"))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Sink whose every publish fails with an HTTP 503.
#[derive(Debug, Default)]
pub struct FailingSink {
    attempts: AtomicUsize,
}

impl FailingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of publish calls received.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl IExportSink for FailingSink {
    async fn publish(&self, _text: String) -> Result<String, ExportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ExportError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}
