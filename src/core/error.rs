//! Error types for queue construction and request outcomes.

use thiserror::Error;

/// Errors produced while building or wiring a request queue.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Capacity must admit at least one request.
    #[error("invalid capacity {0}: must be at least 1")]
    InvalidCapacity(usize),
    /// Configuration failed validation or parsing.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// No usable async runtime for dispatching requests.
    #[error("runtime unavailable: {0}")]
    Runtime(String),
}

/// Outcome delivered to a caller whose request did not succeed.
///
/// The transport's failure value is carried as-is in [`RequestError::Transport`];
/// the scheduler never inspects or rewrites it.
#[derive(Debug, Error)]
pub enum RequestError<E> {
    /// The transport reported a failure.
    #[error("transport failure: {0}")]
    Transport(E),
    /// The dispatch was dropped before the transport reported back.
    #[error("request abandoned before completion")]
    Abandoned,
}

impl<E> RequestError<E> {
    /// Returns the transport failure, if that is what this is.
    pub fn into_transport(self) -> Option<E> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Abandoned => None,
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
