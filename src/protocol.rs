//! Request/response envelope for the engine boundary.
//!
//! The boundary is transport-agnostic: hosts hand the engine structured
//! requests (or JSON that parses into them) and receive exactly one
//! response per recognized request, correlated by `id`. On the wire both
//! sides are flat JSON objects discriminated by a `kind` field:
//!
//! ```json
//! { "id": 3, "kind": "analyze", "docId": 1,
//!   "text": "Hello world.", "granularity": "word" }
//!
//! { "id": 3, "kind": "analyze-result", "docId": 1,
//!   "tokens": ["Hello", "world."], "segments": [...] }
//! ```
//!
//! `id` is an opaque correlation value chosen by the host; the engine
//! echoes it (and `docId`) verbatim so responses can be matched even if a
//! host pipelines many requests. A payload that does not parse into a
//! [`Request`] — wrong types, unknown `kind`, missing fields — is not an
//! error the engine reports; the JSON entry point drops it silently.

use serde::{Deserialize, Serialize};

use crate::{Granularity, Segment};

/// One request to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Host-chosen correlation id, echoed in the response.
    pub id: u64,
    /// Document the request targets.
    pub doc_id: u64,
    /// The operation and its payload.
    #[serde(flatten)]
    pub op: RequestOp,
}

/// Operation payload, discriminated by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RequestOp {
    /// Tokenize `text`, refresh the cache, and segment at `granularity`.
    Analyze {
        /// Full document text to analyze.
        text: String,
        /// Segmentation to apply to the fresh tokens.
        granularity: Granularity,
    },
    /// Segment the cached tokens at `granularity`; empty if nothing cached.
    Segment {
        /// Segmentation to apply to the cached entry.
        granularity: Granularity,
    },
    /// Find `query` in the cached normalized tokens; empty if nothing cached.
    Find {
        /// Free-text query, normalized engine-side.
        query: String,
    },
}

/// One response from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Correlation id copied from the request.
    pub id: u64,
    /// Document id copied from the request.
    pub doc_id: u64,
    /// The result payload.
    #[serde(flatten)]
    pub body: ResponseBody,
}

/// Result payload, discriminated by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ResponseBody {
    /// Fresh tokens plus segments for an `analyze` request.
    #[serde(rename = "analyze-result")]
    Analyze {
        /// The document's full token sequence.
        tokens: Vec<String>,
        /// Segments at the requested granularity.
        segments: Vec<Segment>,
    },
    /// Segments for a `segment` request.
    #[serde(rename = "segment-result")]
    Segment {
        /// Segments at the requested granularity; empty if nothing cached.
        segments: Vec<Segment>,
    },
    /// Match positions for a `find` request.
    #[serde(rename = "find-result")]
    Find {
        /// The query as the host sent it, echoed for display.
        query: String,
        /// Token start positions of every match, ascending.
        matches: Vec<usize>,
    },
}
