use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// pipecheck CLI - pipeline graph analysis service
#[derive(Debug, Clone, Parser)]
#[command(name = "pipecheck")]
#[command(about = "Counts pipeline nodes and edges and reports whether the graph is a DAG")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// pipecheck commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available pipecheck commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default when no command is given)
    Serve,

    /// Analyze a pipeline JSON document and print its summary
    Check {
        /// Pipeline file, or '-' for stdin
        #[arg(help = "Path to a pipeline JSON file, '-' reads stdin")]
        file: PathBuf,

        /// Pretty-print the summary
        #[arg(long, help = "Pretty-print the JSON summary")]
        pretty: bool,
    },

    /// Show version information
    Version,
}

impl Commands {
    /// Whether the command needs the global logger
    pub fn wants_logging(&self) -> bool {
        match self {
            Commands::Serve => true,
            Commands::Check { .. } => true,
            Commands::Version => false,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
