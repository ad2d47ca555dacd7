//! Config loading facade.

use std::path::Path;

use config::File;
use tracing::debug;

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::{validation_failure, TrailConfig};
use crate::error::HistoryError;

/// Loads [`TrailConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest last): defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<TrailConfig, HistoryError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: TrailConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(validation_failure)?;
        debug!(
            workspace = %workspace_root.display(),
            max_size = config.history.max_size,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from one explicit file, still honoring the environment.
    pub fn load_from_file(path: &Path) -> Result<TrailConfig, HistoryError> {
        if !path.exists() {
            return Err(HistoryError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: TrailConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(validation_failure)?;
        Ok(config)
    }
}
