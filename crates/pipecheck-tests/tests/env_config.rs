//! E2E tests for configuration sourced from the environment

use anyhow::Result;
use clap::Parser;
use pipecheck_lib::application::{AppConfig, Cli};
use pipecheck_lib::graph::PipelineSummary;
use pipecheck_lib::primitives::DanglingEdgePolicy;
use pipecheck_lib::testing::clean_test_env;
use pipecheck_tests::TestServer;
use reqwest::StatusCode;
use serde_json::json;

fn load_config(args: &[&str]) -> Result<AppConfig> {
    let cli = Cli::try_parse_from(args)?;
    Ok(AppConfig::load_from_cli(cli)?.app_config)
}

#[tokio::test]
#[serial_test::serial]
async fn e2e_environment_selects_strict_policy() -> Result<()> {
    let config = {
        let env = clean_test_env();
        env.set("PIPECHECK_DANGLING_EDGES", "reject");
        env.set("PIPECHECK_MAX_BODY_BYTES", "4096");
        load_config(&["pipecheck"])?
    };
    assert_eq!(config.dangling_edges, DanglingEdgePolicy::Reject);
    assert_eq!(config.max_body_bytes, 4096);

    let server = TestServer::start_with(config).await?;
    let response = server
        .parse(&json!({ "nodes": [{ "id": "a" }], "edges": [{ "source": "a", "target": "b" }] }))
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    server.stop().await
}

#[tokio::test]
#[serial_test::serial]
async fn e2e_cli_flag_overrides_environment() -> Result<()> {
    let config = {
        let env = clean_test_env();
        env.set("PIPECHECK_DANGLING_EDGES", "reject");
        load_config(&["pipecheck", "--dangling-edges", "permissive"])?
    };
    assert_eq!(config.dangling_edges, DanglingEdgePolicy::Permissive);

    let server = TestServer::start_with(config).await?;
    let summary: PipelineSummary = server
        .parse(&json!({ "nodes": [{ "id": "a" }], "edges": [{ "source": "a", "target": "b" }] }))
        .await?
        .json()
        .await?;
    // Implicit target b drains after a, overshooting the single declared node
    assert!(!summary.is_dag);

    server.stop().await
}
