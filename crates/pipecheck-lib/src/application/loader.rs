//! Configuration loading
//!
//! Coordinates loading configuration from `.env` files, the environment and
//! the command line into one validated [`AppConfig`].

use crate::primitives::ConfigError;

use super::{
    cli::{Cli, CliConfig},
    config::AppConfig,
    env::EnvironmentConfig,
};
use clap::Parser;

/// Files consulted for environment overrides, in order
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl AppConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<CliConfig, ConfigError> {
        // .env files must land in the environment before clap reads it
        load_env_files()?;
        Self::load_from_cli(Cli::parse())
    }

    /// Finish loading from an already parsed command line
    pub fn load_from_cli(cli: Cli) -> Result<CliConfig, ConfigError> {
        let cli_config = CliConfig::from_cli(cli);

        // CLI arguments and PIPECHECK_* variables over defaults
        let mut config = Self::default().merge_with(cli_config.app_config);

        // Standard color variables only fill in an `auto` intent
        config.color = EnvironmentConfig::load()?.resolve_color(config.color);

        config.validate()?;

        Ok(CliConfig {
            app_config: config,
            command: cli_config.command,
        })
    }
}

/// Load .env files; a missing file is not an error
fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
