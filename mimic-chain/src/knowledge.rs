//! Rendered knowledge base → transition table.

use std::collections::BTreeSet;

use mimic_core::constants::KNOWLEDGE_BASE_VERSION;
use mimic_core::{KnowledgeBase, KnowledgeBaseError};

use crate::table::TransitionTable;
use crate::tokenizer::normalize_term;

/// Parse rendered text and check its version.
pub fn parse(rendered: &str) -> Result<KnowledgeBase, KnowledgeBaseError> {
    let kb: KnowledgeBase =
        serde_json::from_str(rendered).map_err(|e| KnowledgeBaseError::Malformed {
            reason: e.to_string(),
        })?;
    if kb.version != KNOWLEDGE_BASE_VERSION {
        return Err(KnowledgeBaseError::UnsupportedVersion {
            found: kb.version,
            expected: KNOWLEDGE_BASE_VERSION,
        });
    }
    Ok(kb)
}

/// Load `kb` into an empty table and pruned set. Every token must already be
/// in normalized form, no record may mention a pruned term, and the counts
/// must sum to at most `u64::MAX`.
pub fn load_into(
    table: &mut TransitionTable,
    pruned: &mut BTreeSet<String>,
    kb: &KnowledgeBase,
) -> Result<(), KnowledgeBaseError> {
    if kb.order != table.order() {
        return Err(KnowledgeBaseError::OrderMismatch {
            found: kb.order,
            expected: table.order(),
        });
    }

    for term in &kb.pruned {
        pruned.insert(normalized(term)?);
    }

    for record in &kb.transitions {
        if record.context.len() != kb.order {
            return Err(KnowledgeBaseError::InvalidRecord {
                reason: format!(
                    "context {:?} has {} tokens, expected {}",
                    record.context,
                    record.context.len(),
                    kb.order
                ),
            });
        }
        if record.count == 0 {
            return Err(KnowledgeBaseError::InvalidRecord {
                reason: format!("zero count for {:?} -> {}", record.context, record.successor),
            });
        }
        for token in record.context.iter().chain(std::iter::once(&record.successor)) {
            let token = normalized(token)?;
            if pruned.contains(&token) {
                return Err(KnowledgeBaseError::InvalidRecord {
                    reason: format!("record mentions pruned term {token:?}"),
                });
            }
        }
        if table.occurrences().checked_add(record.count).is_none() {
            return Err(KnowledgeBaseError::InvalidRecord {
                reason: format!(
                    "count for {:?} -> {} overflows the table total",
                    record.context, record.successor
                ),
            });
        }
        table.record(&record.context, &record.successor, record.count);
    }
    Ok(())
}

fn normalized(token: &str) -> Result<String, KnowledgeBaseError> {
    match normalize_term(token) {
        Some(t) if t == token => Ok(t),
        _ => Err(KnowledgeBaseError::InvalidRecord {
            reason: format!("{token:?} is not a normalized token"),
        }),
    }
}
