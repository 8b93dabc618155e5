//! E2E tests for the `check` command

use anyhow::Result;
use pipecheck_lib::application::commands::execute_command_with_config;
use pipecheck_lib::application::{AppConfig, Commands};
use pipecheck_lib::graph::PipelineSummary;
use pipecheck_tests::fixtures::{feedback_loop_pipeline, llm_pipeline};
use tempfile::TempDir;

async fn run_check(document: &serde_json::Value, pretty: bool) -> Result<String> {
    let dir = TempDir::new()?;
    let path = dir.path().join("pipeline.json");
    std::fs::write(&path, serde_json::to_string(document)?)?;

    let mut out = Vec::new();
    execute_command_with_config(
        Commands::Check { file: path, pretty },
        &AppConfig::default(),
        &mut out,
    )
    .await?;
    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn e2e_check_editor_export() -> Result<()> {
    let output = run_check(&llm_pipeline(), false).await?;
    let summary: PipelineSummary = serde_json::from_str(output.trim())?;
    assert_eq!(
        summary,
        PipelineSummary {
            num_nodes: 4,
            num_edges: 3,
            is_dag: true
        }
    );
    Ok(())
}

#[tokio::test]
async fn e2e_check_pretty_output() -> Result<()> {
    let output = run_check(&feedback_loop_pipeline(), true).await?;
    assert!(output.contains("\n  \"is_dag\": false"));
    let summary: PipelineSummary = serde_json::from_str(&output)?;
    assert!(!summary.is_dag);
    Ok(())
}
