//! Error types for the trail history tracker.

use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Invalid session id: {0:?}")]
    InvalidSessionId(String),

    #[error("Corrupt value under key {key}: {reason}")]
    CorruptValue { key: String, reason: String },

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced by the history tracker and its surrounding services
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The operation is not allowed for the current request (e.g. a non-GET push).
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A caller-supplied argument was rejected (e.g. an empty context name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for HistoryError {
    fn from(err: config::ConfigError) -> Self {
        HistoryError::ConfigError(err.to_string())
    }
}
