//! E2E tests for the cross-origin policy

use anyhow::Result;
use pipecheck_lib::application::AppConfig;
use pipecheck_tests::TestServer;
use reqwest::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn e2e_default_origin_is_allowed_with_credentials() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .client
        .request(Method::OPTIONS, server.url("/pipelines/parse"))
        .header(ORIGIN, "http://localhost:3000")
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .send()
        .await?;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    server.stop().await
}

#[tokio::test]
async fn e2e_configured_origins_replace_default() -> Result<()> {
    let server = TestServer::start_with(AppConfig {
        allowed_origins: vec!["https://editor.example".to_string()],
        ..AppConfig::default()
    })
    .await?;

    let allowed = server
        .client
        .post(server.url("/pipelines/parse"))
        .header(ORIGIN, "https://editor.example")
        .json(&json!({ "nodes": [], "edges": [] }))
        .send()
        .await?;
    assert_eq!(
        allowed.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://editor.example"
    );

    let refused = server
        .client
        .post(server.url("/pipelines/parse"))
        .header(ORIGIN, "http://localhost:3000")
        .json(&json!({ "nodes": [], "edges": [] }))
        .send()
        .await?;
    assert!(refused.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());

    server.stop().await
}
