//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{HistoryError, StorageError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &HistoryError) -> String {
    match e {
        HistoryError::InvalidOperation(msg) => format!("error: {}", msg),
        HistoryError::InvalidArgument(msg) => format!("error: {}", msg),
        HistoryError::StorageError(StorageError::SessionNotFound(id)) => {
            format!("error: no variables stored for session '{}'", id)
        }
        other => format!("error: {}", other),
    }
}
