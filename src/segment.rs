//! The Segment type and granularity selector.

use serde::{Deserialize, Serialize};

/// A display-ready grouping of tokens with its position in the token stream.
///
/// Segments are what the reader actually flashes on screen: a word, a pair of
/// words, a sentence, a tweet-sized run of sentences. Each one remembers
/// where it came from so the UI can highlight, resume, and search against the
/// same token sequence it was built from.
///
/// ## Token Indices, Not Byte Offsets
///
/// `start_index` counts *tokens*, not characters. The reader navigates by
/// token position (word 0, word 1, ...), so byte offsets into the original
/// text would be the wrong currency:
///
/// ```rust
/// use saccade::{segment_tokens, Granularity};
///
/// let tokens: Vec<String> = ["one", "two", "three"].map(String::from).into();
/// let segments = segment_tokens(&tokens, Granularity::Bigram);
///
/// assert_eq!(segments[1].text, "three");
/// assert_eq!(segments[1].start_index, 2); // third token
/// assert_eq!(segments[1].word_count, 1);
/// ```
///
/// ## Partition Guarantee
///
/// The segments of one segmentation call, ordered by `start_index`, tile the
/// underlying token sequence with no gaps and no overlaps; the sum of
/// `word_count` over all segments equals the token count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// The display text, tokens joined by single spaces.
    pub text: String,
    /// Token index at which this segment begins in the owning sequence.
    pub start_index: usize,
    /// Number of tokens contributing to `text`.
    pub word_count: usize,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(text: impl Into<String>, start_index: usize, word_count: usize) -> Self {
        Self {
            text: text.into(),
            start_index,
            word_count,
        }
    }

    /// The length of the display text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the display text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The token-index range this segment covers.
    #[must_use]
    pub fn token_span(&self) -> std::ops::Range<usize> {
        self.start_index..self.start_index + self.word_count
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment {{ start: {}, words: {}, len: {} }}",
            self.start_index,
            self.word_count,
            self.len()
        )
    }
}

/// The grouping strategy for segmentation.
///
/// A closed set: the protocol carries these as lowercase strings, and every
/// variant selects a distinct algorithm (see [`segment_tokens`] and the
/// text-level entry points).
///
/// | Granularity | Grouping rule |
/// |-------------|---------------|
/// | `Word` | one token per segment |
/// | `Bigram` | non-overlapping windows of 2 tokens |
/// | `Trigram` | non-overlapping windows of 3 tokens |
/// | `Sentence` | punctuation-terminated runs |
/// | `Tweet` | whole sentences packed under a length budget |
///
/// [`segment_tokens`]: crate::segment_tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One segment per token.
    Word,
    /// Two-token windows.
    Bigram,
    /// Three-token windows.
    Trigram,
    /// Punctuation-terminated sentence runs.
    Sentence,
    /// Sentences packed into tweet-length chunks.
    Tweet,
}

impl Granularity {
    /// The wire name of this granularity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Bigram => "bigram",
            Self::Trigram => "trigram",
            Self::Sentence => "sentence",
            Self::Tweet => "tweet",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
