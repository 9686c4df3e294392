//! Tweet-sized segmentation: sentences packed under a character budget.
//!
//! ## The Overflow Cascade
//!
//! Packing runs as a priority-ordered fallback chain, one tier handing off
//! to the next only when its unit no longer fits:
//!
//! ```text
//! sentence fits the open buffer?   -> append it, keep packing
//! sentence fits a buffer alone?    -> flush buffer, start fresh with it
//! sentence too long for any buffer -> flush buffer, pack its tokens:
//!     token fits the open chunk?   -> append it, keep packing
//!     token fits a chunk alone?    -> flush chunk, start fresh with it
//!     token too long for any chunk -> flush chunk, emit it alone
//! ```
//!
//! The last tier never truncates: a single token longer than the budget
//! becomes its own over-budget segment and the reader sees it whole.
//!
//! ## Length Is Display Length
//!
//! The budget counts extended grapheme clusters, not bytes or code points,
//! so a family emoji or a flag costs one column the way it occupies one
//! column on screen. Joining spaces count too: a buffer of pieces measures
//! `sum(piece lengths) + (pieces - 1)`.
//!
//! ## Position Accounting
//!
//! Sentences come from the same text-level splitter as
//! [`segment_text_by_sentence`](crate::segment_text_by_sentence), and
//! `start_index` advances by the same per-sentence token counts, so tweet
//! segments and text-sentence segments of one document line up against the
//! same token positions.

use std::mem;

use unicode_segmentation::UnicodeSegmentation;

use crate::sentence::sentence_token_runs;
use crate::Segment;

/// Pack text into segments no longer than `max_chars` display columns.
///
/// Whole sentences are packed greedily; a sentence that cannot fit in any
/// buffer is split by the token-level cascade described in the module docs.
/// A `max_chars` of zero degrades to one token per segment.
///
/// ```rust
/// use saccade::segment_text_by_tweet;
///
/// let segs = segment_text_by_tweet(
///     "First sentence here. Second sentence there. Third sentence now.",
///     35,
/// );
///
/// // each sentence fits alone; no two fit together
/// let texts: Vec<&str> = segs.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(
///     texts,
///     ["First sentence here.", "Second sentence there.", "Third sentence now."]
/// );
/// ```
#[must_use]
pub fn segment_text_by_tweet(text: &str, max_chars: usize) -> Vec<Segment> {
    let mut segments = Vec::new();

    let mut pending = String::new();
    let mut pending_len = 0;
    let mut pending_words = 0;
    let mut pending_start = 0;
    let mut offset = 0;

    for sentence in sentence_token_runs(text) {
        let words = sentence.len();
        let joined = sentence.join(" ");
        let len = display_len(&joined);

        if len > max_chars {
            // next tier: the sentence can never fit a buffer
            if pending_words > 0 {
                segments.push(Segment::new(
                    mem::take(&mut pending),
                    pending_start,
                    pending_words,
                ));
                pending_len = 0;
                pending_words = 0;
            }
            pack_tokens(&sentence, offset, max_chars, &mut segments);
        } else if pending_words == 0 {
            pending = joined;
            pending_len = len;
            pending_words = words;
            pending_start = offset;
        } else if pending_len + 1 + len <= max_chars {
            pending.push(' ');
            pending.push_str(&joined);
            pending_len += 1 + len;
            pending_words += words;
        } else {
            segments.push(Segment::new(
                mem::replace(&mut pending, joined),
                pending_start,
                pending_words,
            ));
            pending_len = len;
            pending_words = words;
            pending_start = offset;
        }

        offset += words;
    }
    if pending_words > 0 {
        segments.push(Segment::new(pending, pending_start, pending_words));
    }

    segments
}

/// Token-level tiers for a sentence longer than the budget.
///
/// Greedy packing with the same join-by-space measure as the sentence tier;
/// a token longer than the budget flushes the open chunk and is emitted
/// alone, untruncated.
fn pack_tokens(tokens: &[String], offset: usize, max_chars: usize, segments: &mut Vec<Segment>) {
    let mut chunk = String::new();
    let mut chunk_len = 0;
    let mut chunk_words = 0;
    let mut chunk_start = offset;

    for (i, token) in tokens.iter().enumerate() {
        let len = display_len(token);

        if len > max_chars {
            if chunk_words > 0 {
                segments.push(Segment::new(mem::take(&mut chunk), chunk_start, chunk_words));
                chunk_len = 0;
                chunk_words = 0;
            }
            segments.push(Segment::new(token.clone(), offset + i, 1));
        } else if chunk_words == 0 {
            chunk = token.clone();
            chunk_len = len;
            chunk_words = 1;
            chunk_start = offset + i;
        } else if chunk_len + 1 + len <= max_chars {
            chunk.push(' ');
            chunk.push_str(token);
            chunk_len += 1 + len;
            chunk_words += 1;
        } else {
            segments.push(Segment::new(
                mem::replace(&mut chunk, token.clone()),
                chunk_start,
                chunk_words,
            ));
            chunk_len = len;
            chunk_words = 1;
            chunk_start = offset + i;
        }
    }
    if chunk_words > 0 {
        segments.push(Segment::new(chunk, chunk_start, chunk_words));
    }
}

/// Length in extended grapheme clusters.
fn display_len(s: &str) -> usize {
    s.graphemes(true).count()
}
