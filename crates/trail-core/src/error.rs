//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A navigation move is already in flight; the request was dropped.
    #[error("navigation already in progress")]
    MoveInFlight,

    /// The requested checkpoint does not exist on the current path.
    #[error("checkpoint {index} is out of range (path has {count} checkpoints)")]
    CheckpointOutOfRange {
        /// The requested checkpoint index.
        index: usize,
        /// Number of checkpoints on the path.
        count: usize,
    },

    /// The token already rests on the requested checkpoint.
    #[error("token already rests on checkpoint {0}")]
    AlreadyAtCheckpoint(usize),

    /// A validation error in configuration or content.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error (I/O, parsing, closed channels).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Returns `true` for navigation requests that were refused without any
    /// state change. These are malformed or ill-timed input, not faults.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MoveInFlight | Self::CheckpointOutOfRange { .. } | Self::AlreadyAtCheckpoint(_)
        )
    }
}
