//! Configuration System
//!
//! Layered configuration for the history tracker: built-in defaults, the user's
//! global config file, workspace config files and `TRAIL_*` environment variables.

use crate::error::HistoryError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Default number of contexts kept per session.
pub const DEFAULT_HISTORY_MAX_SIZE: usize = 10;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailConfig {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// History tracker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of contexts kept; not persisted with the history itself
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

fn default_max_size() -> usize {
    DEFAULT_HISTORY_MAX_SIZE
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
        }
    }
}

/// Session storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Sled database directory. Relative paths are resolved against the workspace
    /// root; unset means the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the directory holding the session database.
    pub fn resolve_store_path(&self, workspace_root: &Path) -> PathBuf {
        match &self.store_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => workspace_root.join(path),
            None => directories::ProjectDirs::from("", "", "trail")
                .map(|dirs| dirs.data_dir().join("sessions"))
                .unwrap_or_else(|| workspace_root.join(".trail").join("sessions")),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    History(String),
    Storage(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::History(msg) => write!(f, "History: {}", msg),
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TrailConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.history.max_size == 0 {
            errors.push(ValidationError::History(
                "max_size must be at least 1".to_string(),
            ));
        }

        if let Some(path) = &self.storage.store_path {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::Storage(
                    "Store path cannot be empty".to_string(),
                ));
            }
        }

        if let Err(msg) = self.logging.validate() {
            errors.push(ValidationError::Logging(msg));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, HistoryError> {
        toml::to_string_pretty(self)
            .map_err(|e| HistoryError::ConfigError(format!("Failed to render config: {}", e)))
    }
}

/// Fold validation failures into a single configuration error.
pub(crate) fn validation_failure(errors: Vec<ValidationError>) -> HistoryError {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    HistoryError::ConfigError(joined)
}
