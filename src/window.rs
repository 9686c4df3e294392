//! Fixed token windows: word, bigram, trigram.
//!
//! The simplest granularities: march over the token stream in non-overlapping
//! windows of 1, 2, or 3 tokens.
//!
//! ```text
//! tokens:  ["one", "two", "three", "four", "five"]
//! bigram:  ["one two"] ["three four"] ["five"]
//!           start 0     start 2        start 4   <- trailing partial kept
//! ```
//!
//! A trailing window with fewer tokens than the window size is still emitted:
//! the reader must always reach the end of the document, so dropping the tail
//! is never an option.

use crate::Segment;

/// Segment tokens into non-overlapping windows of `size` tokens.
///
/// `size` 1/2/3 correspond to the word/bigram/trigram granularities. The
/// final window may be shorter than `size`; it is emitted as its own segment.
/// Empty input yields no segments. A `size` of zero yields no segments as
/// well — there is no meaningful zero-width display unit.
#[must_use]
pub fn segment_windows(tokens: &[String], size: usize) -> Vec<Segment> {
    if tokens.is_empty() || size == 0 {
        return vec![];
    }

    tokens
        .chunks(size)
        .enumerate()
        .map(|(w, window)| Segment::new(window.join(" "), w * size, window.len()))
        .collect()
}
