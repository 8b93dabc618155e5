//! E2E tests for POST /pipelines/parse against a live server

use anyhow::Result;
use pipecheck_lib::application::AppConfig;
use pipecheck_lib::graph::PipelineSummary;
use pipecheck_lib::primitives::DanglingEdgePolicy;
use pipecheck_lib::server::ErrorBody;
use pipecheck_tests::TestServer;
use pipecheck_tests::fixtures::{
    branching_pipeline, editor_pipeline, feedback_loop_pipeline, llm_pipeline,
};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn e2e_ping() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.client.get(server.url("/")).send().await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>().await?,
        json!({ "Ping": "Pong" })
    );

    server.stop().await
}

#[tokio::test]
async fn e2e_editor_pipeline_is_dag() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server.parse(&llm_pipeline()).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<PipelineSummary>().await?,
        PipelineSummary {
            num_nodes: 4,
            num_edges: 3,
            is_dag: true
        }
    );

    server.stop().await
}

#[tokio::test]
async fn e2e_feedback_loop_is_not_dag() -> Result<()> {
    let server = TestServer::start().await?;

    let summary: PipelineSummary = server.parse(&feedback_loop_pipeline()).await?.json().await?;
    assert_eq!(summary.num_nodes, 4);
    assert_eq!(summary.num_edges, 4);
    assert!(!summary.is_dag);

    server.stop().await
}

#[tokio::test]
async fn e2e_branching_pipeline_with_isolated_node() -> Result<()> {
    let server = TestServer::start().await?;

    let summary: PipelineSummary = server.parse(&branching_pipeline()).await?.json().await?;
    assert_eq!(
        summary,
        PipelineSummary {
            num_nodes: 6,
            num_edges: 5,
            is_dag: true
        }
    );

    server.stop().await
}

#[tokio::test]
async fn e2e_empty_pipeline() -> Result<()> {
    let server = TestServer::start().await?;

    let summary: PipelineSummary = server
        .parse(&json!({ "nodes": [], "edges": [] }))
        .await?
        .json()
        .await?;
    assert_eq!(
        summary,
        PipelineSummary {
            num_nodes: 0,
            num_edges: 0,
            is_dag: true
        }
    );

    server.stop().await
}

#[tokio::test]
async fn e2e_duplicates_counted_as_submitted() -> Result<()> {
    let server = TestServer::start().await?;

    let payload = editor_pipeline(
        &[("a", "text"), ("a", "text"), ("b", "llm")],
        &[("a", "b"), ("a", "b")],
    );
    let summary: PipelineSummary = server.parse(&payload).await?.json().await?;
    assert_eq!(summary.num_nodes, 3);
    assert_eq!(summary.num_edges, 2);
    assert!(summary.is_dag);

    server.stop().await
}

#[tokio::test]
async fn e2e_schema_violation_returns_detail() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .parse(&json!({ "nodes": [{ "id": "a" }], "edges": [{ "source": "a" }] }))
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = response.json().await?;
    assert!(body.detail.contains("target"));

    server.stop().await
}

#[tokio::test]
async fn e2e_permissive_server_accepts_dangling_edges() -> Result<()> {
    let server = TestServer::start().await?;

    let payload = json!({
        "nodes": [{ "id": "a" }, { "id": "b" }],
        "edges": [{ "source": "a", "target": "b" }, { "source": "x", "target": "y" }]
    });
    let summary: PipelineSummary = server.parse(&payload).await?.json().await?;
    assert!(summary.is_dag);

    server.stop().await
}

#[tokio::test]
async fn e2e_strict_server_rejects_dangling_edges() -> Result<()> {
    let server = TestServer::start_with(AppConfig {
        dangling_edges: DanglingEdgePolicy::Reject,
        ..AppConfig::default()
    })
    .await?;

    let payload = json!({
        "nodes": [{ "id": "a" }, { "id": "b" }],
        "edges": [{ "source": "a", "target": "b" }, { "source": "x", "target": "y" }]
    });
    let response = server.parse(&payload).await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<ErrorBody>().await?.detail,
        "Edge 1 has source 'x' which is not a declared node"
    );

    server.stop().await
}

#[tokio::test]
async fn e2e_body_limit() -> Result<()> {
    let server = TestServer::start_with(AppConfig {
        max_body_bytes: 256,
        ..AppConfig::default()
    })
    .await?;

    let response = server.parse(&llm_pipeline()).await?;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    server.stop().await
}
