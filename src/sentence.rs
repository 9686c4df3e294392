//! Sentence segmentation, two ways.
//!
//! ## Two Heuristics, Kept Apart
//!
//! There are two sentence boundaries in this crate and they are *not* the
//! same algorithm:
//!
//! - **Token-based** ([`segment_tokens_by_sentence`]): a token ends a
//!   sentence when its tail matches `.`/`!`/`?` plus optional closing
//!   quotes/brackets. Works on any token stream, even one whose original
//!   text is gone.
//! - **Text-based** ([`segment_text_by_sentence`]): scans the raw
//!   (whitespace-collapsed) text for a terminator followed by optional
//!   closing marks and then a space or end of input. This sees punctuation
//!   context that tokenization can lose, so it is the path of record when
//!   the original text is available.
//!
//! They disagree on edge cases. `"Stop."` ends a sentence under both, a
//! bare `"3.14"` under neither, and bracket-merged tokens can shift where
//! the token path sees a terminator. That disagreement is deliberate: each
//! heuristic stands on its own terms rather than being reconciled into a
//! third, subtly different one.
//!
//! ## Position Accounting
//!
//! The text-based splitter re-tokenizes each sentence independently and
//! accumulates `start_index` as a running token count, so downstream
//! consumers can line sentence segments up against the document's token
//! stream without character offsets.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenizer::{collapse_whitespace, tokenize};
use crate::Segment;

/// Token tail that closes a sentence: terminator plus optional closing marks.
static TOKEN_SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["'”’)\]}]*$"#).expect("token sentence-end pattern"));

/// Text-level boundary: terminator, optional closing marks, then a space or
/// end of input. Runs against whitespace-collapsed text only.
static TEXT_SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["'”’)\]}]*(?: |$)"#).expect("text sentence-boundary pattern"));

/// Group a token stream into sentence segments.
///
/// Tokens accumulate until one matches the sentence-ending tail pattern;
/// that token closes the segment. A trailing run with no terminator is
/// flushed as a final segment regardless of punctuation — the reader always
/// reaches the end of the document.
///
/// ```rust
/// use saccade::{segment_tokens_by_sentence, tokenize};
///
/// let tokens = tokenize("Stop here. Then \u{201c}go on!\u{201d} unfinished tail");
/// let segs = segment_tokens_by_sentence(&tokens);
///
/// assert_eq!(segs[0].text, "Stop here.");
/// assert_eq!(segs[1].text, "Then \u{201c}go on!\u{201d}");
/// assert_eq!(segs[2].text, "unfinished tail");
/// ```
#[must_use]
pub fn segment_tokens_by_sentence(tokens: &[String]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, tok) in tokens.iter().enumerate() {
        if TOKEN_SENTENCE_END.is_match(tok) {
            segments.push(Segment::new(tokens[start..=i].join(" "), start, i + 1 - start));
            start = i + 1;
        }
    }
    if start < tokens.len() {
        segments.push(Segment::new(
            tokens[start..].join(" "),
            start,
            tokens.len() - start,
        ));
    }

    segments
}

/// Split text into sentence segments using true punctuation context.
///
/// Whitespace is collapsed, boundaries are found by scanning for a
/// terminator plus optional closing marks followed by a space or the end of
/// input, and each sentence is re-tokenized independently for its display
/// text and `word_count`. `start_index` is the running token count of all
/// prior sentences; a sentence that tokenizes to nothing is dropped and
/// advances nothing.
///
/// ```rust
/// use saccade::segment_text_by_sentence;
///
/// let segs = segment_text_by_sentence("Hello world. Another line here! Final sentence");
///
/// let texts: Vec<&str> = segs.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, ["Hello world.", "Another line here!", "Final sentence"]);
///
/// let starts: Vec<usize> = segs.iter().map(|s| s.start_index).collect();
/// assert_eq!(starts, [0, 2, 5]);
/// ```
#[must_use]
pub fn segment_text_by_sentence(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut offset = 0;

    for tokens in sentence_token_runs(text) {
        let count = tokens.len();
        segments.push(Segment::new(tokens.join(" "), offset, count));
        offset += count;
    }

    segments
}

/// Per-sentence token lists for the text-based paths.
///
/// Sentences that tokenize to nothing are already dropped, so every run is
/// non-empty. Shared by [`segment_text_by_sentence`] and the tweet packer,
/// which must agree on sentence boundaries and token accounting.
pub(crate) fn sentence_token_runs(text: &str) -> Vec<Vec<String>> {
    let collapsed = collapse_whitespace(text);
    split_sentence_bounds(&collapsed)
        .into_iter()
        .map(tokenize)
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

/// Slice collapsed text into raw sentence strings at boundary matches.
///
/// Expects collapsed input: the only whitespace is single ASCII spaces, so a
/// boundary match ends either at a space (stripped from the sentence) or at
/// the end of input.
fn split_sentence_bounds(collapsed: &str) -> Vec<&str> {
    if collapsed.is_empty() {
        return vec![];
    }

    let mut sentences = Vec::new();
    let mut last = 0;

    for m in TEXT_SENTENCE_BOUNDARY.find_iter(collapsed) {
        let end = if m.as_str().ends_with(' ') {
            m.end() - 1
        } else {
            m.end()
        };
        if end > last {
            sentences.push(&collapsed[last..end]);
        }
        last = m.end();
    }
    if last < collapsed.len() {
        sentences.push(&collapsed[last..]);
    }

    sentences
}
