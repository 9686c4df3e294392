//! Error types for saccade.

/// Errors that can occur on the engine boundary.
///
/// The text algorithms themselves are total and never fail; errors only
/// arise from the worker channel plumbing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The worker thread is no longer accepting requests.
    #[error("engine worker has stopped")]
    WorkerStopped,

    /// The response channel closed with no response pending.
    #[error("engine response channel closed")]
    ResponseChannelClosed,

    /// The worker thread panicked before shutdown completed.
    #[error("engine worker panicked")]
    WorkerPanicked,
}

/// Result type for saccade operations.
pub type Result<T> = std::result::Result<T, Error>;
