use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for the crate.
///
/// Aggregates the low-level failure modes into the three categories callers
/// actually branch on: bad input rejected before the network, a failed
/// network exchange, or a payload that could not be serialized.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed caller input (missing id, empty query, non-object payload).
    /// Raised before any network call; never retried.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network failure or non-success response status, propagated unchanged
    /// from the transport adapter.
    #[error("network transport error: {0}")]
    Transport(#[from] TransportError),

    /// A request payload could not be converted to JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// True when the underlying failure is worth retrying (timeouts,
    /// connection errors, 408/429/5xx). Validation and serialization
    /// failures never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_retryable(),
            _ => false,
        }
    }
}
