// Tests for pipeline payloads and summaries

use super::*;
use serde_json::json;

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn test_extra_fields_are_ignored() {
    let payload = json!({
        "nodes": [
            { "id": "customInput-1", "type": "customInput", "position": { "x": 10, "y": 20 } },
            { "id": "llm-1", "type": "llm", "data": { "model": "any" } }
        ],
        "edges": [
            { "id": "e1", "source": "customInput-1", "target": "llm-1", "animated": true }
        ]
    });

    let pipeline: Pipeline = serde_json::from_value(payload).unwrap();
    assert_eq!(
        pipeline,
        Pipeline::from_parts(["customInput-1", "llm-1"], [("customInput-1", "llm-1")])
    );
}

#[test]
fn test_node_without_id_is_rejected() {
    let payload = json!({ "nodes": [{ "type": "llm" }], "edges": [] });
    assert!(serde_json::from_value::<Pipeline>(payload).is_err());
}

#[test]
fn test_edge_without_target_is_rejected() {
    let payload = json!({ "nodes": [{ "id": "a" }], "edges": [{ "source": "a" }] });
    assert!(serde_json::from_value::<Pipeline>(payload).is_err());
}

#[test]
fn test_missing_collections_are_rejected() {
    assert!(serde_json::from_value::<Pipeline>(json!({ "nodes": [] })).is_err());
    assert!(serde_json::from_value::<Pipeline>(json!({ "edges": [] })).is_err());
}

#[test]
fn test_summary_serializes_with_wire_names() {
    let summary = PipelineSummary {
        num_nodes: 3,
        num_edges: 2,
        is_dag: true,
    };
    assert_eq!(
        serde_json::to_value(summary).unwrap(),
        json!({ "num_nodes": 3, "num_edges": 2, "is_dag": true })
    );
}

// ============================================================================
// Summaries
// ============================================================================

#[test]
fn test_empty_pipeline_summary() {
    let summary = Pipeline::default()
        .summarize(DanglingEdgePolicy::Permissive)
        .unwrap();
    assert_eq!(
        summary,
        PipelineSummary {
            num_nodes: 0,
            num_edges: 0,
            is_dag: true
        }
    );
}

#[test]
fn test_counts_are_literal_lengths() {
    // Duplicate node ids and repeated edges are counted as submitted
    let pipeline = Pipeline::from_parts(["a", "a", "b"], [("a", "b"), ("a", "b")]);
    let summary = pipeline.summarize(DanglingEdgePolicy::Permissive).unwrap();
    assert_eq!(summary.num_nodes, 3);
    assert_eq!(summary.num_edges, 2);
    assert!(summary.is_dag);
}

#[test]
fn test_cycle_summary() {
    let pipeline = Pipeline::from_parts(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")]);
    let summary = pipeline.summarize(DanglingEdgePolicy::Permissive).unwrap();
    assert_eq!(summary.num_nodes, 3);
    assert_eq!(summary.num_edges, 3);
    assert!(!summary.is_dag);
}

// ============================================================================
// Dangling Edge Policy
// ============================================================================

#[test]
fn test_permissive_policy_keeps_implicit_node_semantics() {
    let pipeline = Pipeline::from_parts(["a"], [("a", "ghost")]);
    let summary = pipeline.summarize(DanglingEdgePolicy::Permissive).unwrap();
    assert_eq!(summary.num_nodes, 1);
    assert_eq!(summary.num_edges, 1);
    assert!(!summary.is_dag);
}

#[test]
fn test_reject_policy_reports_first_dangling_endpoint() {
    let pipeline = Pipeline::from_parts(["a", "b"], [("a", "b"), ("ghost", "b"), ("a", "phantom")]);
    let err = pipeline.summarize(DanglingEdgePolicy::Reject).unwrap_err();
    assert_eq!(
        err,
        PipelineError::DanglingEdge {
            index: 1,
            endpoint: EdgeEndpoint::Source,
            id: "ghost".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Edge 1 has source 'ghost' which is not a declared node"
    );
}

#[test]
fn test_reject_policy_checks_targets() {
    let pipeline = Pipeline::from_parts(["a"], [("a", "phantom")]);
    assert_eq!(
        pipeline.find_dangling_edge(),
        Some(PipelineError::DanglingEdge {
            index: 0,
            endpoint: EdgeEndpoint::Target,
            id: "phantom".to_string(),
        })
    );
}

#[test]
fn test_reject_policy_accepts_closed_graph() {
    let pipeline = Pipeline::from_parts(
        ["a", "b", "c", "d"],
        [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    );
    assert_eq!(pipeline.find_dangling_edge(), None);
    assert!(pipeline.summarize(DanglingEdgePolicy::Reject).unwrap().is_dag);
}
