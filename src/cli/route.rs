//! CLI route: single route table and run context. Each invocation plays the part of
//! one request against the selected session.

use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation::{
    format_history_json, format_history_text, format_last_context, format_session_list,
    format_visit_result,
};
use crate::config::TrailConfig;
use crate::error::{HistoryError, StorageError};
use crate::history::Browser;
use crate::request::Request;
use crate::session::{SessionRegistry, SledSessionStore};
use tracing::info;

/// Runtime context for CLI execution: resolved config and the session database.
pub struct RunContext {
    config: TrailConfig,
    registry: SessionRegistry,
    session_id: String,
    max_size: usize,
}

impl RunContext {
    /// Build the run context from an already loaded configuration.
    pub fn with_config(config: TrailConfig, cli: &Cli) -> Result<Self, HistoryError> {
        let max_size = cli.max_size.unwrap_or(config.history.max_size);
        let store_path = config.storage.resolve_store_path(&cli.workspace);
        std::fs::create_dir_all(&store_path).map_err(StorageError::IoError)?;
        let registry = SessionRegistry::open(&store_path)?;

        Ok(Self {
            config,
            registry,
            session_id: cli.session.clone(),
            max_size,
        })
    }

    /// Configuration in effect for this invocation, with CLI overrides applied.
    pub fn effective_config(&self) -> TrailConfig {
        let mut config = self.config.clone();
        config.history.max_size = self.max_size;
        config
    }

    fn session(&self) -> Result<SledSessionStore, HistoryError> {
        Ok(self.registry.session(&self.session_id)?)
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, HistoryError> {
        let output = self.execute_inner(command)?;
        self.registry.flush()?;
        Ok(output)
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, HistoryError> {
        match command {
            Commands::Visit { name, uri, method } => {
                let session = self.session()?;
                let request = Request::new(method.as_str(), uri.as_str());
                let mut browser = Browser::new(request, &session, self.max_size)?;
                browser.keep_current_context(name)?;
                info!(session = %self.session_id, name = %name, uri = %uri, "Context kept");
                let kept = browser
                    .get_last_context()
                    .ok_or_else(|| HistoryError::InvalidOperation("history is empty".to_string()))?;
                Ok(format_visit_result(
                    kept,
                    browser.get_context_history().len(),
                    self.max_size,
                ))
            }
            Commands::History { format } => {
                let session = self.session()?;
                let browser = Browser::new(Request::get("/"), &session, self.max_size)?;
                if format == "json" {
                    format_history_json(browser.get_context_history())
                } else {
                    Ok(format_history_text(
                        browser.get_context_history(),
                        self.max_size,
                    ))
                }
            }
            Commands::Last { format } => {
                let session = self.session()?;
                let browser = Browser::new(Request::get("/"), &session, self.max_size)?;
                format_last_context(browser.get_last_context(), format)
            }
            Commands::Sessions => Ok(format_session_list(&self.registry.list_sessions()?)),
            Commands::Forget => {
                let removed = self.registry.forget(&self.session_id)?;
                Ok(format!(
                    "Forgot session '{}' ({} variable(s) removed)",
                    self.session_id, removed
                ))
            }
            Commands::Config => self.effective_config().to_toml(),
        }
    }
}
