//! Trail CLI Binary
//!
//! Command-line front end for the session-backed browsing history.

use clap::Parser;
use std::process;
use tracing::{error, info};
use trail::cli::{Cli, RunContext};
use trail::config::{ConfigLoader, TrailConfig};
use trail::error::HistoryError;
use trail::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", trail::cli::map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(msg) = logging_config.validate() {
        eprintln!("{}", trail::cli::map_error(&HistoryError::ConfigError(msg)));
        process::exit(1);
    }
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Trail CLI starting");

    let context = match RunContext::with_config(config, &cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error opening session store: {}", e);
            eprintln!("{}", trail::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", trail::cli::map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<TrailConfig, HistoryError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&cli.workspace),
    }
}

/// Fold CLI logging flags over the configured logging section.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
