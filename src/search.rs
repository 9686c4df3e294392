//! Token-window search over normalized text.
//!
//! Search never sees display tokens. Both sides are normalized the same
//! way — tokenize, case-fold, strip edge punctuation — so `"(Reading)"` in
//! the document and `"read"` in the query box meet as `"reading"` vs
//! `"read"` and match by substring containment:
//!
//! ```text
//! document  ["focus", "on", "reading", "speed"]
//! query     ["read"]
//!                          └── "reading".contains("read")  ->  index 2
//! ```
//!
//! Multi-token queries slide a window of their own length over the
//! document; every offset must contain its counterpart. All matching start
//! positions are reported, overlaps included — ranking and highlighting
//! are the caller's concern.

use crate::tokenizer::{normalize_token, tokenize};

/// Normalize a free-text query into search tokens.
///
/// The query goes through the same tokenizer and per-token normalization
/// as document text; tokens that normalize to nothing (pure punctuation)
/// are dropped.
#[must_use]
pub fn normalize_query(query: &str) -> Vec<String> {
    tokenize(query)
        .iter()
        .map(|t| normalize_token(t))
        .filter(|t| !t.is_empty())
        .collect()
}

/// All start positions where `query` matches `doc`, in ascending order.
///
/// A start position matches when, for every offset `j`, the document token
/// at `start + j` is non-empty and contains the query token at `j` as a
/// substring. An empty query never matches, and neither does a document
/// shorter than the query.
#[must_use]
pub fn find_matches(doc: &[String], query: &[String]) -> Vec<usize> {
    if query.is_empty() || doc.len() < query.len() {
        return vec![];
    }

    (0..=doc.len() - query.len())
        .filter(|&start| {
            query.iter().enumerate().all(|(j, q)| {
                let d = &doc[start + j];
                !d.is_empty() && d.contains(q.as_str())
            })
        })
        .collect()
}
