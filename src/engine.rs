//! The engine boundary: one dispatcher, one request at a time.
//!
//! ## Processing Model
//!
//! The engine is deliberately single-threaded and message-driven. Requests
//! are handled strictly one at a time, each running to completion (cache
//! update, segmentation, response) before the next begins, so the cache
//! needs no locking and responses come back in arrival order. Hosts that
//! want a background worker get one thread and two channels via
//! [`EngineHandle::spawn`]; hosts that already own a loop call
//! [`Engine::handle`] (typed) or [`Engine::handle_json`] (string payloads)
//! directly.
//!
//! ## Granularity Routing
//!
//! Token granularities reuse the cached token sequence untouched; text
//! granularities go back to the stored text, where punctuation context
//! that tokenization can blur is still intact:
//!
//! ```text
//! word / bigram / trigram   cached tokens -> fixed windows
//! sentence                  cached text   -> punctuation-context splitter
//! tweet                     cached text   -> sentence packing cascade
//! ```
//!
//! ## Degradation over Errors
//!
//! Nothing on this boundary raises for bad input. A `segment` or `find`
//! with no cached entry answers with empty output; empty text analyzes to
//! empty sequences; a JSON payload that does not parse into a request is
//! dropped with no response at all. The only errors hosts ever see are
//! channel-plumbing failures from a stopped worker.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

use crate::cache::{CacheEntry, DocumentCache};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::protocol::{Request, RequestOp, Response, ResponseBody};
use crate::search::{find_matches, normalize_query};
use crate::sentence::segment_text_by_sentence;
use crate::tweet::segment_text_by_tweet;
use crate::window::segment_windows;
use crate::{Granularity, Segment};

/// The text-preparation engine: cache plus dispatcher.
#[derive(Debug, Default)]
pub struct Engine {
    cache: DocumentCache,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with explicit configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            cache: DocumentCache::new(),
            config,
        }
    }

    /// Process one request, producing exactly one response.
    ///
    /// `id` and `doc_id` are echoed verbatim. Requests against documents
    /// with no cached entry degrade to empty output rather than failing.
    pub fn handle(&mut self, request: Request) -> Response {
        let Request { id, doc_id, op } = request;
        tracing::debug!(id, doc_id, "dispatching request");
        let config = self.config;

        let body = match op {
            RequestOp::Analyze { text, granularity } => {
                let (tokens, segments) = self.cache.entry(doc_id, Some(&text)).map_or_else(
                    || (Vec::new(), Vec::new()),
                    |entry| {
                        (
                            entry.tokens.clone(),
                            segments_for(entry, granularity, config),
                        )
                    },
                );
                ResponseBody::Analyze { tokens, segments }
            }
            RequestOp::Segment { granularity } => {
                let segments = self
                    .cache
                    .entry(doc_id, None)
                    .map(|entry| segments_for(entry, granularity, config))
                    .unwrap_or_default();
                ResponseBody::Segment { segments }
            }
            RequestOp::Find { query } => {
                let matches = self
                    .cache
                    .entry(doc_id, None)
                    .map(|entry| find_matches(&entry.normalized_tokens, &normalize_query(&query)))
                    .unwrap_or_default();
                ResponseBody::Find { query, matches }
            }
        };

        Response { id, doc_id, body }
    }

    /// Process one JSON payload, returning the JSON response if any.
    ///
    /// A payload that does not parse into a [`Request`] is dropped
    /// silently: `None`, no response, no error surfaced to the sender.
    pub fn handle_json(&mut self, payload: &str) -> Option<String> {
        let request: Request = match serde_json::from_str(payload) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(%err, "dropping malformed request");
                return None;
            }
        };

        let response = self.handle(request);
        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize response");
                None
            }
        }
    }

    /// Drop the cached entry for `doc_id`, if any. Returns whether one
    /// existed. Eviction is host-driven; the engine never evicts on its own.
    pub fn evict(&mut self, doc_id: u64) -> bool {
        self.cache.remove(doc_id)
    }

    /// Number of documents currently cached.
    #[must_use]
    pub fn cached_docs(&self) -> usize {
        self.cache.len()
    }
}

/// Route one granularity to its segmentation path.
fn segments_for(entry: &CacheEntry, granularity: Granularity, config: EngineConfig) -> Vec<Segment> {
    match granularity {
        Granularity::Word => segment_windows(&entry.tokens, 1),
        Granularity::Bigram => segment_windows(&entry.tokens, 2),
        Granularity::Trigram => segment_windows(&entry.tokens, 3),
        Granularity::Sentence => segment_text_by_sentence(&entry.text),
        Granularity::Tweet => segment_text_by_tweet(&entry.text, config.tweet_max_chars),
    }
}

/// Handle to an engine running on its own worker thread.
///
/// Requests go in over one channel and responses come back over another,
/// in request order. Dropping the handle (or calling [`shutdown`]) closes
/// the request channel, which stops the worker after it drains what it
/// already accepted.
///
/// [`shutdown`]: EngineHandle::shutdown
#[derive(Debug)]
pub struct EngineHandle {
    requests: Sender<Request>,
    responses: Receiver<Response>,
    worker: JoinHandle<()>,
}

impl EngineHandle {
    /// Spawn an engine on a new worker thread.
    #[must_use]
    pub fn spawn(config: EngineConfig) -> Self {
        let (request_tx, request_rx) = unbounded::<Request>();
        let (response_tx, response_rx) = unbounded::<Response>();

        let worker = thread::spawn(move || {
            let mut engine = Engine::with_config(config);
            for request in request_rx {
                if response_tx.send(engine.handle(request)).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: request_tx,
            responses: response_rx,
            worker,
        }
    }

    /// Queue a request for the worker.
    pub fn send(&self, request: Request) -> Result<()> {
        self.requests.send(request).map_err(|_| Error::WorkerStopped)
    }

    /// Block until the next response arrives.
    pub fn recv(&self) -> Result<Response> {
        self.responses.recv().map_err(|_| Error::ResponseChannelClosed)
    }

    /// Take the next response if one is already waiting.
    pub fn try_recv(&self) -> Result<Option<Response>> {
        match self.responses.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Error::ResponseChannelClosed),
        }
    }

    /// Stop the worker and wait for it to exit.
    ///
    /// In-flight requests finish processing; their responses are discarded
    /// along with the handle.
    pub fn shutdown(self) -> Result<()> {
        drop(self.requests);
        self.worker.join().map_err(|_| Error::WorkerPanicked)
    }
}
