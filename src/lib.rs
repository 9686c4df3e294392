//! # saccade
//!
//! Text preparation for speed-reading (RSVP) apps: tokenization,
//! granularity segmentation, per-document caching, and in-document search.
//!
//! ## The Problem
//!
//! Rapid serial visual presentation flashes one chunk of text at a time at
//! a fixed point. At 400+ words per minute there is no second look, so the
//! chunks themselves carry all the readability:
//!
//! - A bracketed aside split across flashes (`"["`, `"1"`, `"]"`) is noise
//! - A sentence boundary ignored mid-flash breaks prosody
//! - A chunk wider than the display gets truncated or reflowed, both fatal
//! - Re-tokenizing a whole book on every play/pause wastes the UI budget
//!
//! This crate is the engine side of that problem: it turns raw extracted
//! text into display-ready segments and answers search queries over the
//! same token stream, one request at a time.
//!
//! ```text
//! text    -- collapse, split, bracket-merge -->  tokens
//! tokens  -- granularity policy             -->  segments
//! tokens  -- case-fold, strip edges         -->  search side
//! ```
//!
//! ## Granularities
//!
//! | Granularity | Unit                    | Typical use                     |
//! |-------------|-------------------------|---------------------------------|
//! | `word`      | one token               | classic RSVP, highest speed     |
//! | `bigram`    | two tokens              | fewer flashes, same order       |
//! | `trigram`   | three tokens            | phrase-at-a-time pacing         |
//! | `sentence`  | one sentence            | skim mode, natural prosody      |
//! | `tweet`     | sentences under a budget| card view, fits a fixed panel   |
//!
//! `word`/`bigram`/`trigram` are pure windowing over tokens. `sentence`
//! exists twice — a token-tail heuristic for bare token streams and a
//! text-level splitter with full punctuation context — and `tweet` packs
//! text-level sentences under a display-column budget with a three-tier
//! overflow cascade. See [`sentence`](segment_tokens_by_sentence),
//! [`segment_text_by_sentence`], and [`segment_text_by_tweet`] for the
//! details and the ways the heuristics deliberately differ.
//!
//! ## Tokens Are Not `split(' ')`
//!
//! Extracted text (PDF text layers especially) loves to shed spaces around
//! brackets. The tokenizer merges the four ASCII bracket pairs back into
//! visually atomic units so a reader never sees a lone `"["` flash by:
//!
//! ```text
//! "pixel [ 1 ] wide"  ->  ["pixel", "[1]", "wide"]
//! "call ( now )"      ->  ["call", "(now)"]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use saccade::{segment_tokens, tokenize, Granularity};
//!
//! let tokens = tokenize("Reading fast is [ mostly ] practice. Believe it!");
//! let sentences = segment_tokens(&tokens, Granularity::Sentence);
//!
//! assert_eq!(sentences[0].text, "Reading fast is [mostly] practice.");
//! assert_eq!(sentences[1].text, "Believe it!");
//! ```
//!
//! ## The Engine
//!
//! Hosts that hold documents open talk to an [`Engine`]: a cache plus a
//! dispatcher that answers `analyze`, `segment`, and `find` requests,
//! correlated by id. Everything degrades to empty output instead of
//! erroring — see [`Engine`] and [`EngineHandle`] for the model.
//!
//! ```rust
//! use saccade::{Engine, Granularity, Request, RequestOp, ResponseBody};
//!
//! let mut engine = Engine::new();
//! let response = engine.handle(Request {
//!     id: 1,
//!     doc_id: 42,
//!     op: RequestOp::Analyze {
//!         text: "Hello world. Read on!".to_owned(),
//!         granularity: Granularity::Sentence,
//!     },
//! });
//!
//! match response.body {
//!     ResponseBody::Analyze { segments, .. } => {
//!         assert_eq!(segments[0].text, "Hello world.");
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Or spawn the engine on its own worker thread and speak over channels:
//!
//! ```rust
//! use saccade::{EngineConfig, EngineHandle, Granularity, Request, RequestOp};
//!
//! let handle = EngineHandle::spawn(EngineConfig::default());
//!
//! handle.send(Request {
//!     id: 7,
//!     doc_id: 1,
//!     op: RequestOp::Analyze {
//!         text: "One two three.".to_owned(),
//!         granularity: Granularity::Word,
//!     },
//! })?;
//!
//! let response = handle.recv()?;
//! assert_eq!(response.id, 7);
//!
//! handle.shutdown()?;
//! # Ok::<(), saccade::Error>(())
//! ```
//!
//! ## Performance Shape
//!
//! | Operation          | Cost                         | Notes                      |
//! |--------------------|------------------------------|----------------------------|
//! | tokenize           | O(n) over text               | amortized by the cache     |
//! | word/bigram/trigram| O(t) over tokens             | pure windowing             |
//! | sentence / tweet   | O(n) over text               | regex scan + re-tokenize   |
//! | find               | O(t × q) worst case          | q = query tokens, small    |
//!
//! The document cache makes granularity switches free of re-tokenization:
//! `analyze` once, then `segment` at any granularity from the same entry.

mod cache;
mod config;
mod engine;
mod error;
mod protocol;
mod search;
mod segment;
mod sentence;
mod tokenizer;
mod tweet;
mod window;

pub use cache::{CacheEntry, DocumentCache};
pub use config::{EngineConfig, DEFAULT_TWEET_CHARS};
pub use engine::{Engine, EngineHandle};
pub use error::{Error, Result};
pub use protocol::{Request, RequestOp, Response, ResponseBody};
pub use search::{find_matches, normalize_query};
pub use segment::{Granularity, Segment};
pub use sentence::{segment_text_by_sentence, segment_tokens_by_sentence};
pub use tokenizer::{collapse_whitespace, normalize_token, tokenize};
pub use tweet::segment_text_by_tweet;
pub use window::segment_windows;

/// Segment a token sequence at the requested granularity.
///
/// This is the token-level entry point: it never looks at the original
/// text. `word`/`bigram`/`trigram` are fixed windows, `sentence` uses the
/// token-tail heuristic, and `tweet` joins the tokens and runs the
/// text-level packing cascade at the default budget of
/// [`DEFAULT_TWEET_CHARS`] columns. Callers who still hold the original
/// text get better sentence boundaries from [`segment_text_by_sentence`]
/// and an adjustable budget from [`segment_text_by_tweet`].
///
/// ```rust
/// use saccade::{segment_tokens, tokenize, Granularity};
///
/// let tokens = tokenize("one two three four five");
/// let pairs = segment_tokens(&tokens, Granularity::Bigram);
///
/// let texts: Vec<&str> = pairs.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, ["one two", "three four", "five"]);
///
/// let starts: Vec<usize> = pairs.iter().map(|s| s.start_index).collect();
/// assert_eq!(starts, [0, 2, 4]);
/// ```
#[must_use]
pub fn segment_tokens(tokens: &[String], granularity: Granularity) -> Vec<Segment> {
    match granularity {
        Granularity::Word => segment_windows(tokens, 1),
        Granularity::Bigram => segment_windows(tokens, 2),
        Granularity::Trigram => segment_windows(tokens, 3),
        Granularity::Sentence => segment_tokens_by_sentence(tokens),
        Granularity::Tweet => segment_text_by_tweet(&tokens.join(" "), DEFAULT_TWEET_CHARS),
    }
}
