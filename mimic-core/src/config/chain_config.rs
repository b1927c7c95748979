use serde::{Deserialize, Serialize};

use super::defaults;

/// Successor and start-context sampling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingKind {
    /// Choices are proportional to recorded occurrence counts.
    #[default]
    FrequencyWeighted,
    /// Every recorded choice is equally likely.
    Uniform,
}

/// Chain model configuration, shared by every community.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Context length k. Only 1 and 2 are supported.
    pub order: usize,
    /// Upper bound on generated output, in tokens. Must be at least `order`.
    /// Seeds longer than this are still echoed in full.
    pub max_output_tokens: usize,
    /// Keep raw message texts alongside the table for export.
    pub retain_corpus: bool,
    /// Oldest messages are dropped once the corpus holds this many.
    pub max_corpus_messages: usize,
    /// Sampling policy used for generation.
    pub sampling: SamplingKind,
    /// Fixed RNG seed. `None` seeds each model from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            order: defaults::DEFAULT_CHAIN_ORDER,
            max_output_tokens: defaults::DEFAULT_MAX_OUTPUT_TOKENS,
            retain_corpus: defaults::DEFAULT_RETAIN_CORPUS,
            max_corpus_messages: defaults::DEFAULT_MAX_CORPUS_MESSAGES,
            sampling: SamplingKind::default(),
            rng_seed: None,
        }
    }
}
