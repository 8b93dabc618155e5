//! Command execution handlers

use crate::application::{AppConfig, CliConfig, Commands};
use crate::graph::{Pipeline, PipelineSummary};
use crate::server;
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Execute CLI commands; no command means serve
pub async fn execute_command(config: CliConfig) -> Result<()> {
    let command = config.command.unwrap_or(Commands::Serve);
    execute_command_with_config(command, &config.app_config, &mut std::io::stdout()).await
}

/// Execute a specific command against a resolved config (for testing)
pub async fn execute_command_with_config(
    command: Commands,
    config: &AppConfig,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Serve => handle_serve(config).await,
        Commands::Check { file, pretty } => {
            let summary = handle_check(config, &file)?;
            write_summary(out, &summary, pretty)
        }
        Commands::Version => handle_version(out),
    }
}

async fn handle_serve(config: &AppConfig) -> Result<()> {
    info!(addr = %config.bind_addr(), "Starting pipeline server");
    server::serve(config)
        .await
        .context("Pipeline server failed")
}

/// Read a pipeline document from `file` ('-' = stdin) and summarize it
pub fn handle_check(config: &AppConfig, file: &Path) -> Result<PipelineSummary> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read pipeline from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read pipeline file: {}", file.display()))?
    };

    let pipeline: Pipeline = serde_json::from_str(&content)
        .with_context(|| format!("Invalid pipeline document: {}", file.display()))?;
    debug!(
        nodes = pipeline.nodes.len(),
        edges = pipeline.edges.len(),
        "Pipeline document loaded"
    );

    let summary = pipeline.summarize(config.dangling_edges)?;
    Ok(summary)
}

fn write_summary(out: &mut dyn Write, summary: &PipelineSummary, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(summary)?
    } else {
        serde_json::to_string(summary)?
    };
    writeln!(out, "{}", rendered).context("Failed to write summary")?;
    Ok(())
}

fn handle_version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "pipecheck {}", env!("CARGO_PKG_VERSION")).context("Failed to write version")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
