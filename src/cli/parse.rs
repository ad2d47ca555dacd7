//! CLI parse: clap types for trail. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trail CLI - bounded browsing history kept per session
#[derive(Parser)]
#[command(name = "trail")]
#[command(about = "Bounded, deduplicating browsing history kept per session")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Session id whose history is read or written
    #[arg(long, default_value = "default")]
    pub session: String,

    /// History size limit for this invocation (overrides config)
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a visit to a named context
    Visit {
        /// Context name
        name: String,
        /// URI of the visited view
        #[arg(long, default_value = "/")]
        uri: String,
        /// Request method of the visit
        #[arg(long, default_value = "GET")]
        method: String,
    },
    /// Show the session history, newest first
    History {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the most recent context
    Last {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List sessions that hold variables
    Sessions,
    /// Remove every variable of the selected session
    Forget,
    /// Print the effective configuration
    Config,
}
