//! Error types for backend initialization.

use thiserror::Error;

/// Errors returned while initializing a backend instance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendInitError {
    /// Construction arguments do not fit the declared properties.
    #[error("invalid backend arguments: {0}")]
    InvalidArguments(String),

    /// The concrete backend refused the arguments.
    #[error("backend rejected initialization: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for BackendInitError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArguments(err.to_string())
    }
}
