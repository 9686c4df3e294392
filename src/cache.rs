//! Per-document memoization of tokenization results.
//!
//! Tokenizing a book-length text on every request would dominate the
//! engine's latency, so analysis results are memoized per document id:
//!
//! ```text
//! doc id ──▶ CacheEntry { text, tokens, normalized_tokens }
//! ```
//!
//! The contract is deliberately coarse. Entries are replaced wholesale,
//! never patched field-by-field, so a reader of an entry always sees one
//! consistent generation: the tokens and normalized tokens of exactly the
//! stored text. Staleness is decided by comparing the supplied text against
//! the stored text, not by timestamps or hashes — the host already holds
//! the full text when it asks, and equality is cheaper than being clever.
//!
//! Eviction is the host's problem: documents are closed by the UI, not by
//! a size heuristic here, so the cache only grows when told to and shrinks
//! when told to.

use std::collections::HashMap;

use crate::tokenizer::{normalize_token, tokenize};

/// One generation of analysis for one document.
///
/// `normalized_tokens[i]` is always the normalization of `tokens[i]`; both
/// are derived from `text` in a single build and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The exact text this entry was built from.
    pub text: String,
    /// Display tokens, in document order.
    pub tokens: Vec<String>,
    /// Search-side normalization of `tokens`, index-aligned.
    pub normalized_tokens: Vec<String>,
}

impl CacheEntry {
    fn build(text: &str) -> Self {
        let tokens = tokenize(text);
        let normalized_tokens = tokens.iter().map(|t| normalize_token(t)).collect();
        Self {
            text: text.to_owned(),
            tokens,
            normalized_tokens,
        }
    }
}

/// Keyed store of [`CacheEntry`] values, one per document id.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: HashMap<u64, CacheEntry>,
}

impl DocumentCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the entry for `doc_id`, rebuilding from `text` when needed.
    ///
    /// - An existing entry whose stored text equals the supplied text (or
    ///   where no text was supplied) is returned as-is: a hit.
    /// - Supplied text that is new or differs from the stored text replaces
    ///   the entry wholesale before returning it.
    /// - No text and no entry returns `None`; the caller decides whether
    ///   that degrades to empty output or is an error.
    pub fn entry(&mut self, doc_id: u64, text: Option<&str>) -> Option<&CacheEntry> {
        if let Some(text) = text {
            let stale = self.entries.get(&doc_id).map_or(true, |e| e.text != text);
            if stale {
                tracing::debug!(doc_id, chars = text.len(), "rebuilding cache entry");
                self.entries.insert(doc_id, CacheEntry::build(text));
            } else {
                tracing::trace!(doc_id, "cache hit");
            }
        }
        self.entries.get(&doc_id)
    }

    /// Drop the entry for `doc_id`, if any. Returns whether one existed.
    pub fn remove(&mut self, doc_id: u64) -> bool {
        self.entries.remove(&doc_id).is_some()
    }

    /// Number of cached documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_then_reuse_without_text() {
        let mut cache = DocumentCache::new();

        let built = cache.entry(7, Some("Focus on reading speed")).cloned();
        let reused = cache.entry(7, None).cloned();

        assert_eq!(built, reused);
        let entry = reused.unwrap();
        assert_eq!(entry.tokens, ["Focus", "on", "reading", "speed"]);
        assert_eq!(entry.normalized_tokens, ["focus", "on", "reading", "speed"]);
    }

    #[test]
    fn test_same_text_is_a_hit_not_a_rebuild() {
        let mut cache = DocumentCache::new();

        let first = cache.entry(1, Some("same text.")).cloned().unwrap();
        let second = cache.entry(1, Some("same text.")).cloned().unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_new_text_replaces_wholesale() {
        let mut cache = DocumentCache::new();

        cache.entry(1, Some("old words here"));
        let entry = cache.entry(1, Some("brand new")).cloned().unwrap();

        assert_eq!(entry.text, "brand new");
        assert_eq!(entry.tokens, ["brand", "new"]);
        assert_eq!(entry.normalized_tokens, ["brand", "new"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_absent_without_text() {
        let mut cache = DocumentCache::new();
        assert!(cache.entry(42, None).is_none());
    }

    #[test]
    fn test_remove() {
        let mut cache = DocumentCache::new();
        cache.entry(3, Some("short lived"));

        assert!(cache.remove(3));
        assert!(!cache.remove(3));
        assert!(cache.entry(3, None).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_entries_are_independent_per_doc() {
        let mut cache = DocumentCache::new();
        cache.entry(1, Some("alpha beta"));
        cache.entry(2, Some("gamma"));

        assert_eq!(cache.entry(1, None).unwrap().tokens, ["alpha", "beta"]);
        assert_eq!(cache.entry(2, None).unwrap().tokens, ["gamma"]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_normalization_strips_edge_punctuation() {
        let mut cache = DocumentCache::new();
        let entry = cache.entry(9, Some("\u{201c}Hello,\u{201d} (world)!")).cloned().unwrap();

        assert_eq!(entry.tokens, ["\u{201c}Hello,\u{201d}", "(world)!"]);
        assert_eq!(entry.normalized_tokens, ["hello", "world"]);
    }
}
