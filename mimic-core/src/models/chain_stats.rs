use serde::{Deserialize, Serialize};

/// Size summary of one community's learned state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStats {
    /// Distinct contexts with at least one successor.
    pub contexts: usize,
    /// Distinct (context, successor) rows.
    pub transitions: usize,
    /// Sum of all row counts.
    pub occurrences: u64,
    /// Messages passed to ingest, including ones that produced no edges.
    pub messages_ingested: u64,
    /// Messages currently retained in the corpus.
    pub corpus_len: usize,
    /// Terms removed by operators.
    pub pruned_terms: usize,
}
