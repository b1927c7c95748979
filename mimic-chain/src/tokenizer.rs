//! Tokenization policy.
//!
//! Text is split on Unicode whitespace and every piece is lower-cased.
//! Punctuation is kept as part of the token, so `"sat."` and `"sat"` are
//! different tokens.

/// Split `text` into normalized tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Normalize a single operator-supplied term. Returns `None` unless the input
/// is exactly one token.
pub fn normalize_term(term: &str) -> Option<String> {
    let mut tokens = tokenize(term);
    if tokens.len() == 1 {
        tokens.pop()
    } else {
        None
    }
}
