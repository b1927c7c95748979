//! `ChainModel` — one community's learned state plus the operations on it.
//!
//! A model is owned by exactly one worker; nothing here is synchronized.

use std::collections::{BTreeSet, VecDeque};

use mimic_core::config::ChainConfig;
use mimic_core::{ChainStats, KnowledgeBase, MimicResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::knowledge;
use crate::sampling::{policy_for, ISamplingPolicy};
use crate::table::TransitionTable;
use crate::tokenizer::{normalize_term, tokenize};

/// Markov chain for one community.
pub struct ChainModel {
    config: ChainConfig,
    table: TransitionTable,
    corpus: VecDeque<String>,
    pruned: BTreeSet<String>,
    messages_ingested: u64,
    policy: Box<dyn ISamplingPolicy>,
    rng: StdRng,
}

impl ChainModel {
    /// Empty model using the sampling policy named in `config`.
    pub fn new(config: ChainConfig) -> Self {
        let policy = policy_for(config.sampling);
        Self::with_policy(config, policy)
    }

    /// Empty model with a caller-supplied sampling policy.
    pub fn with_policy(config: ChainConfig, policy: Box<dyn ISamplingPolicy>) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            table: TransitionTable::new(config.order),
            corpus: VecDeque::new(),
            pruned: BTreeSet::new(),
            messages_ingested: 0,
            policy,
            rng,
            config,
        }
    }

    /// Rebuild a model from rendered text.
    pub fn restore(config: ChainConfig, rendered: &str) -> MimicResult<Self> {
        let policy = policy_for(config.sampling);
        Self::restore_with_policy(config, policy, rendered)
    }

    /// Rebuild a model from rendered text with a caller-supplied policy.
    pub fn restore_with_policy(
        config: ChainConfig,
        policy: Box<dyn ISamplingPolicy>,
        rendered: &str,
    ) -> MimicResult<Self> {
        let kb = knowledge::parse(rendered)?;
        debug!(
            transitions = kb.transitions.len(),
            occurrences = kb.occurrences(),
            "restore: knowledge base parsed"
        );
        let mut model = Self::with_policy(config, policy);
        knowledge::load_into(&mut model.table, &mut model.pruned, &kb)?;
        let skip = kb.corpus.len().saturating_sub(model.config.max_corpus_messages);
        if model.config.retain_corpus {
            model.corpus = kb.corpus.into_iter().skip(skip).collect();
        }
        Ok(model)
    }

    /// Learn from one message. Never fails: text that yields fewer than
    /// `order + 1` tokens simply adds no edges.
    ///
    /// Pruned terms act as hard boundaries, so no edge touching one is ever
    /// recorded again.
    pub fn ingest(&mut self, text: &str) {
        self.messages_ingested += 1;
        let tokens = tokenize(text);
        if tokens.is_empty() {
            debug!("ingest: message produced no tokens");
            return;
        }

        let order = self.config.order;
        let mut edges = 0usize;
        for segment in tokens.split(|t| self.pruned.contains(t)) {
            for window in segment.windows(order + 1) {
                self.table.record(&window[..order], &window[order], 1);
                edges += 1;
            }
        }
        debug!(tokens = tokens.len(), edges, "ingest: message learned");

        if self.config.retain_corpus && !tokens.iter().any(|t| self.pruned.contains(t)) {
            self.corpus.push_back(text.to_string());
            while self.corpus.len() > self.config.max_corpus_messages {
                self.corpus.pop_front();
            }
        }
    }

    /// Produce text from the chain.
    ///
    /// With an empty `seed` the start context is sampled from the whole table.
    /// Otherwise the output starts with the normalized seed and continues from
    /// its last `order` tokens; an empty string means the chain cannot continue
    /// from that seed. A seed shorter than `order` continues from a context
    /// ending with it.
    pub fn generate(&mut self, seed: &[String]) -> String {
        let seed: Vec<String> = seed.iter().flat_map(|s| tokenize(s)).collect();
        let order = self.config.order;

        let unseeded = seed.is_empty();
        let (mut output, mut current) = if unseeded {
            match self.pick_start(&[]) {
                Some(context) => (context.clone(), context),
                None => return String::new(),
            }
        } else {
            if seed.iter().any(|t| self.pruned.contains(t)) {
                return String::new();
            }
            if seed.len() >= order {
                let context = seed[seed.len() - order..].to_vec();
                if !self.table.contains_context(&context) {
                    return String::new();
                }
                (seed, context)
            } else {
                match self.pick_start(&seed) {
                    Some(context) => (seed, context),
                    None => return String::new(),
                }
            }
        };

        while output.len() < self.config.max_output_tokens {
            let Some(next) = self.pick_successor(&current) else {
                break;
            };
            current.remove(0);
            current.push(next.clone());
            output.push(next);
        }
        if unseeded {
            output.truncate(self.config.max_output_tokens);
        }

        output.join(" ")
    }

    /// Purge `term` (case-insensitive) from the table and corpus and remember
    /// it as pruned. Returns the number of occurrences removed from the table.
    pub fn remove(&mut self, term: &str) -> u64 {
        let Some(term) = normalize_term(term) else {
            debug!("remove: term is not a single token, nothing to purge");
            return 0;
        };
        let purged = self.table.remove_term(&term);
        let before = self.corpus.len();
        self.corpus
            .retain(|message| !tokenize(message).iter().any(|t| *t == term));
        debug!(
            purged,
            corpus_dropped = before - self.corpus.len(),
            "remove: term purged"
        );
        self.pruned.insert(term);
        purged
    }

    /// Serialized snapshot of the learned state.
    pub fn knowledge_base(&self) -> KnowledgeBase {
        let mut kb = KnowledgeBase::new(self.config.order);
        kb.transitions = self.table.records();
        kb.pruned = self.pruned.iter().cloned().collect();
        kb.corpus = self.corpus.iter().cloned().collect();
        kb
    }

    /// Render the learned state as JSON text, sufficient to [`restore`](Self::restore)
    /// an equivalent model.
    pub fn render(&self) -> MimicResult<String> {
        Ok(serde_json::to_string_pretty(&self.knowledge_base())?)
    }

    pub fn stats(&self) -> ChainStats {
        ChainStats {
            contexts: self.table.context_count(),
            transitions: self.table.transition_count(),
            occurrences: self.table.occurrences(),
            messages_ingested: self.messages_ingested,
            corpus_len: self.corpus.len(),
            pruned_terms: self.pruned.len(),
        }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn corpus(&self) -> impl Iterator<Item = &str> {
        self.corpus.iter().map(String::as_str)
    }

    pub fn is_pruned(&self, term: &str) -> bool {
        normalize_term(term).is_some_and(|t| self.pruned.contains(&t))
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Sample a start context among those ending with `suffix`, weighted by
    /// each context's total occurrences.
    fn pick_start(&mut self, suffix: &[String]) -> Option<Vec<String>> {
        let (contexts, weights): (Vec<_>, Vec<_>) = self
            .table
            .iter()
            .filter(|(context, _)| context.ends_with(suffix))
            .map(|(context, successors)| (context, successors.total()))
            .unzip();
        let index = self.policy.pick(&weights, &mut self.rng)?;
        Some(contexts[index].tokens().to_vec())
    }

    fn pick_successor(&mut self, context: &[String]) -> Option<String> {
        let successors = self.table.successors(context)?;
        let (tokens, weights): (Vec<_>, Vec<_>) = successors.iter().unzip();
        let index = self.policy.pick(&weights, &mut self.rng)?;
        Some(tokens[index].to_string())
    }
}

impl std::fmt::Debug for ChainModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainModel")
            .field("order", &self.config.order)
            .field("policy", &self.policy.name())
            .field("stats", &self.stats())
            .finish()
    }
}
