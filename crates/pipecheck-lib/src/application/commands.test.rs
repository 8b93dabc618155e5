use super::*;
use crate::graph::PipelineError;
use crate::primitives::DanglingEdgePolicy;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_pipeline(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_check_summarizes_file() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(
        &dir,
        "chain.json",
        r#"{
            "nodes": [{ "id": "a" }, { "id": "b" }, { "id": "c" }],
            "edges": [{ "source": "a", "target": "b" }, { "source": "b", "target": "c" }]
        }"#,
    );

    let summary = handle_check(&AppConfig::default(), &path).unwrap();
    assert_eq!(
        summary,
        PipelineSummary {
            num_nodes: 3,
            num_edges: 2,
            is_dag: true
        }
    );
}

#[test]
fn test_check_missing_file_names_path() {
    let err = handle_check(&AppConfig::default(), Path::new("/nonexistent/pipeline.json"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/pipeline.json"));
}

#[test]
fn test_check_invalid_document() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(&dir, "bad.json", r#"{ "nodes": "nope" }"#);

    let err = handle_check(&AppConfig::default(), &path).unwrap_err();
    assert!(err.to_string().starts_with("Invalid pipeline document"));
}

#[test]
fn test_check_honors_reject_policy() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(
        &dir,
        "dangling.json",
        r#"{ "nodes": [{ "id": "a" }], "edges": [{ "source": "a", "target": "b" }] }"#,
    );
    let config = AppConfig {
        dangling_edges: DanglingEdgePolicy::Reject,
        ..AppConfig::default()
    };

    let err = handle_check(&config, &path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::DanglingEdge { index: 0, .. })
    ));
}

#[tokio::test]
async fn test_check_command_writes_json_line() {
    let dir = TempDir::new().unwrap();
    let path = write_pipeline(
        &dir,
        "loop.json",
        r#"{ "nodes": [{ "id": "a" }], "edges": [{ "source": "a", "target": "a" }] }"#,
    );

    let mut out = Vec::new();
    execute_command_with_config(
        Commands::Check {
            file: path,
            pretty: false,
        },
        &AppConfig::default(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"num_nodes\":1,\"num_edges\":1,\"is_dag\":false}\n"
    );
}

#[tokio::test]
async fn test_version_command() {
    let mut out = Vec::new();
    execute_command_with_config(Commands::Version, &AppConfig::default(), &mut out)
        .await
        .unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("pipecheck "));
}
