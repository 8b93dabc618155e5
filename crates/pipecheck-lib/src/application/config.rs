//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use axum::http::HeaderValue;
use clap::Parser;
use serde::Deserialize;
use std::io::IsTerminal;

/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: &str = "8000";
    pub const ALLOWED_ORIGINS: &str = "http://localhost:3000";
    pub const MAX_BODY_BYTES: &str = "2097152"; // 2 MiB
    pub const DANGLING_EDGES: &str = "permissive";
    pub const LOG_LEVEL: &str = "2"; // Info
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;
    use crate::primitives::{ColorIntent, DanglingEdgePolicy, LogFormat, LogOutput};

    pub fn host() -> String {
        defaults::HOST.to_string()
    }

    pub fn port() -> u16 {
        defaults::PORT.parse().unwrap()
    }

    pub fn allowed_origins() -> Vec<String> {
        defaults::ALLOWED_ORIGINS
            .split(',')
            .map(str::to_string)
            .collect()
    }

    pub fn max_body_bytes() -> usize {
        defaults::MAX_BODY_BYTES.parse().unwrap()
    }

    pub fn dangling_edges() -> DanglingEdgePolicy {
        defaults::DANGLING_EDGES.parse().unwrap()
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap()
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap()
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap()
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR.parse().unwrap()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "PIPECHECK_HOST", default_value = defaults::HOST)]
    #[serde(default = "default_fns::host")]
    pub host: String,

    /// Port the HTTP server binds to (0 picks a free port)
    #[arg(short, long, env = "PIPECHECK_PORT", default_value = defaults::PORT)]
    #[serde(default = "default_fns::port")]
    pub port: u16,

    /// Origins allowed by the CORS policy (comma separated)
    #[arg(
        long,
        env = "PIPECHECK_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = defaults::ALLOWED_ORIGINS
    )]
    #[serde(default = "default_fns::allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "PIPECHECK_MAX_BODY_BYTES", default_value = defaults::MAX_BODY_BYTES)]
    #[serde(default = "default_fns::max_body_bytes")]
    pub max_body_bytes: usize,

    /// Handling of edges that name undeclared nodes (permissive, reject)
    #[arg(long, env = "PIPECHECK_DANGLING_EDGES", default_value = defaults::DANGLING_EDGES)]
    #[serde(default = "default_fns::dangling_edges")]
    pub dangling_edges: DanglingEdgePolicy,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "PIPECHECK_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "PIPECHECK_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "PIPECHECK_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "PIPECHECK_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_fns::host(),
            port: default_fns::port(),
            allowed_origins: default_fns::allowed_origins(),
            max_body_bytes: default_fns::max_body_bytes(),
            dangling_edges: default_fns::dangling_edges(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Resolve LoggerConfig, deciding ANSI from the color intent and the output stream
    pub fn to_logger_config(&self) -> LoggerConfig {
        let ansi = match self.color {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => match self.log_output {
                LogOutput::Stderr => std::io::stderr().is_terminal(),
                LogOutput::Stdout => std::io::stdout().is_terminal(),
            },
        };

        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }

    /// `host:port` string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.host != default_fns::host() {
            self.host = other.host;
        }
        if other.port != default_fns::port() {
            self.port = other.port;
        }
        if other.allowed_origins != default_fns::allowed_origins() {
            self.allowed_origins = other.allowed_origins;
        }
        if other.max_body_bytes != default_fns::max_body_bytes() {
            self.max_body_bytes = other.max_body_bytes;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.dangling_edges, DanglingEdgePolicy::Permissive) {
            self.dangling_edges = other.dangling_edges;
        }
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "max_body_bytes must be greater than zero".to_string(),
            });
        }

        self.allowed_origins = self
            .allowed_origins
            .iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        for origin in &self.allowed_origins {
            // Credentialed CORS cannot use a wildcard origin
            if origin == "*" {
                return Err(ConfigError::ValidationFailed {
                    reason: "wildcard origin '*' cannot be combined with credentials".to_string(),
                });
            }
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::InvalidOrigin {
                    origin: origin.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
