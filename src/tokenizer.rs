//! Tokenization: whitespace splitting plus bracket-run merging.
//!
//! Tokens are the atomic unit of everything downstream — segmentation,
//! caching, search. The rules are deliberately dumb: collapse whitespace,
//! split on spaces, then stitch bracket-wrapped fragments back together.
//!
//! ## Why Merge Brackets?
//!
//! Flashing one token at a time makes stray delimiters painful to read:
//!
//! ```text
//! "see [ 1 ] for details"
//!          ↓ naive split
//! ["see", "[", "1", "]", "for", "details"]   <- "[" alone on screen
//!          ↓ bracket merge
//! ["see", "[1]", "for", "details"]           <- citation stays atomic
//! ```
//!
//! The merge is greedy and local — at most two following tokens are
//! examined — so `(word)`, `[1]`, and `<tag>` survive as single display
//! units without anything resembling a real bracket parser. Malformed
//! nesting simply fails to merge and the tokens pass through untouched.
//!
//! ## Normalization
//!
//! Search never compares raw tokens. [`normalize_token`] lower-cases and
//! strips non-alphanumeric edges, so `"Reading,"` matches a query for
//! `read`. Normalized tokens are search-only; display always uses the raw
//! token.

/// The four bracket pairs, in priority order. An earlier pair's merge pass
/// consumes tokens before later pairs see them.
const BRACKET_PAIRS: [(char, char); 4] = [('[', ']'), ('(', ')'), ('{', '}'), ('<', '>')];

/// Collapse Unicode whitespace runs to single ASCII spaces and trim the ends.
///
/// Returns an empty string for empty or whitespace-only input.
///
/// ```rust
/// use saccade::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  one\n\ttwo   three "), "one two three");
/// assert_eq!(collapse_whitespace(" \n\t "), "");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split text into display tokens.
///
/// Whitespace runs are collapsed, the text is split on spaces, and bracket
/// merge passes stitch delimiter-wrapped fragments back into single tokens.
/// Total over any input; empty or whitespace-only text yields an empty vec.
///
/// ```rust
/// use saccade::tokenize;
///
/// assert_eq!(tokenize("a ( b ) c"), ["a", "(b)", "c"]);
/// assert_eq!(tokenize("see [ 1 ] here"), ["see", "[1]", "here"]);
/// assert_eq!(tokenize(""), Vec::<String>::new());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = text.split_whitespace().map(str::to_owned).collect();
    for (open, close) in BRACKET_PAIRS {
        tokens = merge_bracket_pass(tokens, open, close);
    }
    tokens
}

/// One left-to-right merge pass for a single bracket pair.
///
/// Two trigger shapes, checked per token:
///
/// - the token is exactly the open bracket: merge a `open, inner, close`
///   triple into one token when the close stands alone two ahead, or absorb
///   the next token when it already ends with the close;
/// - the token starts with the open bracket (but is more than the bracket)
///   and is not yet closed: absorb a bare close standing immediately after.
///
/// Consumed tokens are skipped; everything else passes through.
fn merge_bracket_pass(tokens: Vec<String>, open: char, close: char) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let tok = &tokens[i];

        if is_exactly(tok, open) {
            // open, inner, close  ->  open+inner+close
            if i + 2 < tokens.len() && is_exactly(&tokens[i + 2], close) {
                out.push(format!("{tok}{}{}", tokens[i + 1], tokens[i + 2]));
                i += 3;
                continue;
            }
            // open, rest-ending-with-close  ->  open+rest
            if i + 1 < tokens.len() && tokens[i + 1].ends_with(close) {
                out.push(format!("{tok}{}", tokens[i + 1]));
                i += 2;
                continue;
            }
        } else if tok.starts_with(open)
            && !tok.ends_with(close)
            && i + 1 < tokens.len()
            && is_exactly(&tokens[i + 1], close)
        {
            // open-prefixed fragment, bare close  ->  fragment+close
            out.push(format!("{tok}{}", tokens[i + 1]));
            i += 2;
            continue;
        }

        out.push(tokens[i].clone());
        i += 1;
    }

    out
}

/// Whether a token is the given character and nothing else.
fn is_exactly(token: &str, ch: char) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

/// Normalize a token for search matching.
///
/// Strips leading and trailing non-alphanumeric characters (Unicode-aware)
/// and lower-cases the rest. The result can be empty — an all-punctuation
/// token such as `--` normalizes to nothing, and search treats it as
/// unmatchable.
///
/// ```rust
/// use saccade::normalize_token;
///
/// assert_eq!(normalize_token("\"Reading,\""), "reading");
/// assert_eq!(normalize_token("[42]"), "42");
/// assert_eq!(normalize_token("--"), "");
/// ```
#[must_use]
pub fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
