//! Serialized form of a community's learned state, as produced by render.

use serde::{Deserialize, Serialize};

use crate::constants::KNOWLEDGE_BASE_VERSION;

/// One row of the transition table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub context: Vec<String>,
    pub successor: String,
    pub count: u64,
}

/// Complete export of one chain model. Records are sorted so equal tables
/// render to identical text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub version: u32,
    pub order: usize,
    pub transitions: Vec<TransitionRecord>,
    #[serde(default)]
    pub pruned: Vec<String>,
    #[serde(default)]
    pub corpus: Vec<String>,
}

impl KnowledgeBase {
    /// Empty knowledge base at the current format version.
    pub fn new(order: usize) -> Self {
        Self {
            version: KNOWLEDGE_BASE_VERSION,
            order,
            transitions: Vec::new(),
            pruned: Vec::new(),
            corpus: Vec::new(),
        }
    }

    /// Sum of all transition counts.
    pub fn occurrences(&self) -> u64 {
        self.transitions.iter().map(|t| t.count).sum()
    }
}
