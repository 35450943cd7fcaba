//! Checkpoint Trail — host error types.

use thiserror::Error;
use trail_core::error::DomainError;

/// Startup and runtime errors for the console host.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// An input line could not be understood.
    #[error("invalid command: {0}")]
    Command(String),

    /// Loading content or talking to the navigation service failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing a scene failed.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Terminal I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
