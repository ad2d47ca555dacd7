//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use super::DEFAULT_HISTORY_MAX_SIZE;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("history.max_size", DEFAULT_HISTORY_MAX_SIZE as i64)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")
}
