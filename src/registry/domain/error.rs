//! Error types for registry domain validation.

use thiserror::Error;

/// Errors returned while constructing registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendDomainError {
    /// The backend name or alias is empty after trimming.
    #[error("backend name must not be empty")]
    EmptyBackendName,

    /// The backend name contains the path separator `/`.
    #[error("backend name '{0}' must not contain '/'")]
    InvalidBackendName(String),

    /// The class type identifier is empty after trimming.
    #[error("backend class type name must not be empty")]
    EmptyTypeName,
}
