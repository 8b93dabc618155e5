//! # pipecheck Library
//!
//! Pipeline graph analysis service: counts the nodes and edges of a submitted
//! pipeline and reports whether it forms a directed acyclic graph.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging setup
//! - [`graph`] - Acyclicity checking and pipeline payloads
//! - [`server`] - HTTP routes, CORS, and request limits
//! - [`application`] - CLI interface, configuration, and command dispatch
//!
//! ## Quick Start
//!
//! ```
//! use pipecheck_lib::graph::is_dag;
//!
//! assert!(is_dag(["a", "b"], [("a", "b")]));
//! assert!(!is_dag(["a"], [("a", "a")]));
//! ```

pub mod application;
pub mod graph;
pub mod logger;
pub mod primitives;
pub mod server;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::{Pipeline, PipelineSummary, is_dag};
pub use logger::Logger;
pub use primitives::{
    ColorIntent, ConfigError, DanglingEdgePolicy, LogFormat, LogLevel, LogOutput, LoggerError,
    ServerError,
};

use anyhow::Result;

pub async fn main() -> Result<()> {
    // Load configuration: defaults -> .env -> env vars -> CLI
    let config = AppConfig::load()?;

    let wants_logging = config
        .command
        .as_ref()
        .is_none_or(Commands::wants_logging);
    if wants_logging {
        Logger::init(&config.app_config.to_logger_config())?;
    }

    execute_command(config).await
}
