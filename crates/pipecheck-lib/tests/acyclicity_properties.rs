//! Classification properties through the public API

use pipecheck_lib::graph::{Pipeline, PipelineSummary, is_dag};
use pipecheck_lib::primitives::DanglingEdgePolicy;

fn summarize(nodes: &[&str], edges: &[(&str, &str)]) -> PipelineSummary {
    Pipeline::from_parts(nodes.iter().copied(), edges.iter().copied())
        .summarize(DanglingEdgePolicy::Permissive)
        .unwrap()
}

#[test]
fn test_documented_cases() {
    let cases: &[(&[&str], &[(&str, &str)], bool)] = &[
        (&[], &[], true),
        (&["a"], &[], true),
        (&["a", "b", "c"], &[("a", "b"), ("b", "c")], true),
        (&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")], false),
        (&["a"], &[("a", "a")], false),
        (
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
            true,
        ),
    ];

    for (nodes, edges, expected) in cases {
        let summary = summarize(nodes, edges);
        assert_eq!(
            summary.is_dag, *expected,
            "nodes={:?} edges={:?}",
            nodes, edges
        );
        assert_eq!(summary.num_nodes, nodes.len());
        assert_eq!(summary.num_edges, edges.len());
    }
}

#[test]
fn test_one_cycle_anywhere_poisons_the_graph() {
    let mut nodes = vec!["x", "y"];
    let mut edges = vec![("x", "y"), ("y", "x")];
    let chain: Vec<String> = (0..100).map(|i| format!("c{}", i)).collect();
    nodes.extend(chain.iter().map(String::as_str));
    edges.extend(chain.windows(2).map(|w| (w[0].as_str(), w[1].as_str())));

    assert!(!is_dag(nodes.iter().copied(), edges.iter().copied()));

    // Drop the back edge and the union is acyclic
    edges.remove(1);
    assert!(is_dag(nodes.iter().copied(), edges.iter().copied()));
}

#[test]
fn test_long_chain_stays_linear() {
    let ids: Vec<String> = (0..50_000).map(|i| format!("n{}", i)).collect();
    let edges: Vec<(&str, &str)> = ids
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect();

    assert!(is_dag(ids.iter().map(String::as_str), edges.iter().copied()));
}
