//! Acyclicity checking with Kahn's algorithm
//!
//! A graph is built per call from borrowed node ids and edge pairs, then
//! drained zero-in-degree first. Nothing outlives the call.

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::trace;

/// Borrowed directed graph over string node ids
///
/// Declared nodes are deduplicated. Edge endpoints that were never declared
/// still get adjacency and in-degree entries (implicit nodes), so they take
/// part in the drain without counting toward the declared total.
#[derive(Debug, Default)]
pub struct DirectedGraph<'a> {
    nodes: HashSet<&'a str>,
    adjacency: HashMap<&'a str, Vec<&'a str>>,
    in_degree: HashMap<&'a str, usize>,
    edge_count: usize,
}

impl<'a> DirectedGraph<'a> {
    /// Build the adjacency and in-degree maps in one pass over the edges
    pub fn new<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let nodes: HashSet<&'a str> = nodes.into_iter().collect();
        let mut in_degree: HashMap<&'a str, usize> =
            nodes.iter().map(|&id| (id, 0)).collect();
        let mut adjacency: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        let mut edge_count = 0;

        for (source, target) in edges {
            adjacency.entry(source).or_default().push(target);
            *in_degree.entry(target).or_insert(0) += 1;
            edge_count += 1;
        }

        Self {
            nodes,
            adjacency,
            in_degree,
            edge_count,
        }
    }

    /// Number of distinct declared nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, repeats included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `id` was declared as a node
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// Number of nodes removed by Kahn's drain
    ///
    /// Seeds the worklist with every declared node of in-degree zero, then
    /// releases neighbors as their in-degree reaches exactly zero. Nodes on a
    /// cycle, or reachable only through one, are never released.
    pub fn drain_count(&self) -> usize {
        let mut in_degree = self.in_degree.clone();
        let mut queue: VecDeque<&'a str> = self
            .nodes
            .iter()
            .copied()
            .filter(|id| in_degree.get(id).copied() == Some(0))
            .collect();

        let mut processed = 0;
        while let Some(node) = queue.pop_front() {
            processed += 1;

            let Some(neighbors) = self.adjacency.get(node) else {
                continue;
            };
            for &neighbor in neighbors {
                if let Some(degree) = in_degree.get_mut(neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        trace!(
            processed,
            declared = self.nodes.len(),
            "Kahn drain finished"
        );
        processed
    }

    /// True iff the drain processed exactly the declared node count
    pub fn is_acyclic(&self) -> bool {
        self.drain_count() == self.nodes.len()
    }
}

/// Classify `(nodes, edges)` as a DAG
pub fn is_dag<'a, N, E>(nodes: N, edges: E) -> bool
where
    N: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = (&'a str, &'a str)>,
{
    DirectedGraph::new(nodes, edges).is_acyclic()
}

#[cfg(test)]
mod tests {
    include!("dag.test.rs");
}
