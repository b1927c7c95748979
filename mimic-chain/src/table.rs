//! `TransitionTable` — context → successor counts.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use mimic_core::TransitionRecord;

/// The k most recent tokens, used as lookup key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Context(Vec<String>);

impl Context {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Whether the context's trailing tokens equal `suffix`.
    pub fn ends_with(&self, suffix: &[String]) -> bool {
        self.0.ends_with(suffix)
    }
}

impl Borrow<[String]> for Context {
    fn borrow(&self) -> &[String] {
        &self.0
    }
}

/// Multiset of successors recorded after one context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Successors {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl Successors {
    fn add(&mut self, token: &str, count: u64) {
        let slot = self.counts.entry(token.to_string()).or_insert(0);
        *slot = slot.saturating_add(count);
        self.total = self.total.saturating_add(count);
    }

    fn remove(&mut self, token: &str) -> u64 {
        let removed = self.counts.remove(token).unwrap_or(0);
        self.total = self.total.saturating_sub(removed);
        removed
    }

    /// Count recorded for `token`, zero if absent.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Successors in token order, with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }
}

/// Learned state of one community. Append-only except through
/// [`TransitionTable::remove_term`]. A context without successors is never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    order: usize,
    rows: BTreeMap<Context, Successors>,
    occurrences: u64,
}

impl TransitionTable {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            rows: BTreeMap::new(),
            occurrences: 0,
        }
    }

    /// Context length k.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Increment `context → successor` by `count`. Counts saturate at
    /// `u64::MAX`.
    ///
    /// # Panics
    /// Panics in debug builds if `context` is not exactly `order` tokens long.
    pub fn record(&mut self, context: &[String], successor: &str, count: u64) {
        debug_assert_eq!(context.len(), self.order);
        if count == 0 {
            return;
        }
        match self.rows.get_mut(context) {
            Some(successors) => successors.add(successor, count),
            None => {
                let mut successors = Successors::default();
                successors.add(successor, count);
                self.rows.insert(Context::new(context.to_vec()), successors);
            }
        }
        self.occurrences = self.occurrences.saturating_add(count);
    }

    pub fn successors(&self, context: &[String]) -> Option<&Successors> {
        self.rows.get(context)
    }

    pub fn contains_context(&self, context: &[String]) -> bool {
        self.rows.contains_key(context)
    }

    /// All contexts with their successor sets, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Context, &Successors)> {
        self.rows.iter()
    }

    /// Delete every row where `term` is part of the context or is the
    /// successor. Returns the sum of the purged counts.
    pub fn remove_term(&mut self, term: &str) -> u64 {
        let mut purged: u64 = 0;
        self.rows.retain(|context, successors| {
            if context.contains(term) {
                purged = purged.saturating_add(successors.total());
                return false;
            }
            purged = purged.saturating_add(successors.remove(term));
            !successors.is_empty()
        });
        self.occurrences = self.occurrences.saturating_sub(purged);
        purged
    }

    /// Whether any row mentions `term`.
    pub fn mentions(&self, term: &str) -> bool {
        self.rows
            .iter()
            .any(|(context, successors)| context.contains(term) || successors.count(term) > 0)
    }

    /// Number of distinct contexts.
    pub fn context_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct (context, successor) rows.
    pub fn transition_count(&self) -> usize {
        self.rows.values().map(Successors::len).sum()
    }

    /// Sum of all counts.
    pub fn occurrences(&self) -> u64 {
        self.occurrences
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flatten into sorted records.
    pub fn records(&self) -> Vec<TransitionRecord> {
        self.rows
            .iter()
            .flat_map(|(context, successors)| {
                successors.iter().map(move |(successor, count)| TransitionRecord {
                    context: context.tokens().to_vec(),
                    successor: successor.to_string(),
                    count,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn record_accumulates_counts() {
        let mut table = TransitionTable::new(2);
        table.record(&ctx(&["the", "cat"]), "sat", 1);
        table.record(&ctx(&["the", "cat"]), "sat", 2);
        table.record(&ctx(&["the", "cat"]), "ran", 1);

        let successors = table.successors(&ctx(&["the", "cat"])).unwrap();
        assert_eq!(successors.count("sat"), 3);
        assert_eq!(successors.count("ran"), 1);
        assert_eq!(successors.total(), 4);
        assert_eq!(table.occurrences(), 4);
        assert_eq!(table.transition_count(), 2);
    }

    #[test]
    fn remove_term_purges_context_and_successor_rows() {
        let mut table = TransitionTable::new(1);
        table.record(&ctx(&["a"]), "cat", 2);
        table.record(&ctx(&["a"]), "dog", 1);
        table.record(&ctx(&["cat"]), "b", 3);

        assert_eq!(table.remove_term("cat"), 5);
        assert!(!table.mentions("cat"));
        assert_eq!(table.occurrences(), 1);
        assert_eq!(table.context_count(), 1);
    }

    #[test]
    fn remove_term_drops_contexts_left_empty() {
        let mut table = TransitionTable::new(1);
        table.record(&ctx(&["a"]), "cat", 1);
        assert_eq!(table.remove_term("cat"), 1);
        assert!(table.is_empty());
        assert!(!table.contains_context(&ctx(&["a"])));
    }

    #[test]
    fn records_are_sorted() {
        let mut table = TransitionTable::new(1);
        table.record(&ctx(&["b"]), "z", 1);
        table.record(&ctx(&["a"]), "y", 1);
        table.record(&ctx(&["a"]), "x", 1);
        let succ: Vec<_> = table.records().into_iter().map(|r| r.successor).collect();
        assert_eq!(succ, vec!["x", "y", "z"]);
    }
}
