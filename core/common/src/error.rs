//! Common error types for MediaLift.

use thiserror::Error;

/// Top-level error type for MediaLift operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network or unclassified backend failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Authentication with the storage backend failed.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The storage backend denied access.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Object not found in the storage backend.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
