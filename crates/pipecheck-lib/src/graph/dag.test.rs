// Tests for Kahn-based acyclicity checking

use super::*;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn check(nodes: &[&str], edges: &[(&str, &str)]) -> bool {
    is_dag(nodes.iter().copied(), edges.iter().copied())
}

fn owned_graph(n: usize, edges: &[(usize, usize)]) -> (Vec<String>, Vec<(String, String)>) {
    let nodes = (0..n).map(|i| format!("n{}", i)).collect();
    let edges = edges
        .iter()
        .map(|&(s, t)| (format!("n{}", s), format!("n{}", t)))
        .collect();
    (nodes, edges)
}

fn check_owned(nodes: &[String], edges: &[(String, String)]) -> bool {
    is_dag(
        nodes.iter().map(String::as_str),
        edges.iter().map(|(s, t)| (s.as_str(), t.as_str())),
    )
}

/// Reference answer from petgraph for graphs whose edges only touch declared nodes
fn petgraph_is_dag(n: usize, edges: &[(usize, usize)]) -> bool {
    let mut graph = DiGraph::<usize, ()>::new();
    let indices: Vec<_> = (0..n).map(|i| graph.add_node(i)).collect();
    for &(s, t) in edges {
        graph.add_edge(indices[s], indices[t], ());
    }
    !is_cyclic_directed(&graph)
}

prop_compose! {
    /// Up to 8 nodes and 16 edges between declared nodes
    fn arb_graph()(n in 1usize..8)(
        edges in prop::collection::vec((0..n, 0..n), 0..16),
        n in Just(n),
    ) -> (usize, Vec<(usize, usize)>) {
        (n, edges)
    }
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test]
fn test_empty_graph_is_dag() {
    assert!(check(&[], &[]));
}

#[test]
fn test_single_isolated_node_is_dag() {
    assert!(check(&["a"], &[]));
}

#[test]
fn test_simple_chain_is_dag() {
    assert!(check(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));
}

#[test]
fn test_simple_cycle_is_not_dag() {
    assert!(!check(
        &["a", "b", "c"],
        &[("a", "b"), ("b", "c"), ("c", "a")]
    ));
}

#[test]
fn test_self_loop_is_not_dag() {
    assert!(!check(&["a"], &[("a", "a")]));
}

#[test]
fn test_diamond_is_dag() {
    assert!(check(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]
    ));
}

#[test]
fn test_disjoint_union_with_cycle_is_not_dag() {
    // DAG component a -> b, cyclic component x <-> y
    assert!(!check(
        &["a", "b", "x", "y"],
        &[("a", "b"), ("x", "y"), ("y", "x")]
    ));
}

#[test]
fn test_node_downstream_of_cycle_blocks_drain() {
    // d is only reachable through the b <-> c cycle
    let graph = DirectedGraph::new(
        ["a", "b", "c", "d"],
        [("a", "b"), ("b", "c"), ("c", "b"), ("c", "d")],
    );
    assert_eq!(graph.drain_count(), 1);
    assert!(!graph.is_acyclic());
}

#[test]
fn test_isolated_nodes_alongside_chain() {
    assert!(check(&["a", "b", "lonely", "other"], &[("a", "b")]));
}

// ============================================================================
// Input Shape Tests
// ============================================================================

#[test]
fn test_duplicate_node_ids_collapse() {
    let graph = DirectedGraph::new(["a", "a", "b"], [("a", "b")]);
    assert_eq!(graph.node_count(), 2);
    assert!(graph.is_acyclic());
}

#[test]
fn test_multi_edges_are_tolerated() {
    let graph = DirectedGraph::new(["a", "b"], [("a", "b"), ("a", "b"), ("a", "b")]);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.is_acyclic());
}

#[test]
fn test_parallel_back_edges_form_cycle() {
    assert!(!check(&["a", "b"], &[("a", "b"), ("a", "b"), ("b", "a")]));
}

// ============================================================================
// Implicit Node Tests (edges naming undeclared ids)
// ============================================================================

#[test]
fn test_undeclared_target_is_drained_and_overcounts() {
    // x is released after a, so two nodes drain against one declared node
    let graph = DirectedGraph::new(["a"], [("a", "x")]);
    assert!(!graph.contains("x"));
    assert_eq!(graph.drain_count(), 2);
    assert!(!graph.is_acyclic());
}

#[test]
fn test_undeclared_source_blocks_its_target() {
    // a waits on x, which never enters the worklist
    let graph = DirectedGraph::new(["a", "b"], [("x", "a")]);
    assert_eq!(graph.drain_count(), 1);
    assert!(!graph.is_acyclic());
}

#[test]
fn test_edges_between_undeclared_ids_are_inert() {
    assert!(check(&["a", "b"], &[("a", "b"), ("x", "y")]));
}

#[test]
fn test_drained_implicit_node_can_offset_a_stuck_declared_node() {
    // a and x drain, b stays on its self-loop: 2 processed == 2 declared
    let graph = DirectedGraph::new(["a", "b"], [("a", "x"), ("b", "b")]);
    assert_eq!(graph.drain_count(), 2);
    assert!(graph.is_acyclic());
}

#[test]
fn test_undeclared_cycle_does_not_affect_declared_nodes() {
    assert!(check(&["a"], &[("x", "y"), ("y", "x")]));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_matches_petgraph_on_closed_graphs((n, edges) in arb_graph()) {
        let (nodes, named_edges) = owned_graph(n, &edges);
        prop_assert_eq!(check_owned(&nodes, &named_edges), petgraph_is_dag(n, &edges));
    }

    #[test]
    fn prop_edge_order_does_not_matter(
        ((n, edges), shuffled) in arb_graph()
            .prop_flat_map(|(n, edges)| {
                let shuffled = Just(edges.clone()).prop_shuffle();
                (Just((n, edges)), shuffled)
            })
    ) {
        let (nodes, original) = owned_graph(n, &edges);
        let (_, reordered) = owned_graph(n, &shuffled);
        prop_assert_eq!(check_owned(&nodes, &original), check_owned(&nodes, &reordered));
    }

    #[test]
    fn prop_node_order_does_not_matter((n, edges) in arb_graph(), rotation in 0usize..8) {
        let (nodes, named_edges) = owned_graph(n, &edges);
        let mut rotated = nodes.clone();
        rotated.rotate_left(rotation % n);
        rotated.reverse();
        prop_assert_eq!(
            check_owned(&nodes, &named_edges),
            check_owned(&rotated, &named_edges)
        );
    }

    #[test]
    fn prop_adding_self_loop_breaks_acyclicity((n, edges) in arb_graph(), pick in 0usize..8) {
        let mut edges = edges;
        let node = pick % n;
        edges.push((node, node));
        let (nodes, named_edges) = owned_graph(n, &edges);
        prop_assert!(!check_owned(&nodes, &named_edges));
    }
}
