//! Pipeline payloads and their summary
//!
//! Request records carry only the fields the checker reads. Anything else a
//! client sends along (positions, labels, node data) is ignored by serde.

use super::dag::DirectedGraph;
use crate::primitives::DanglingEdgePolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Errors raised while summarizing a pipeline
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Edge {index} has {endpoint} '{id}' which is not a declared node")]
    DanglingEdge {
        index: usize,
        endpoint: EdgeEndpoint,
        id: String,
    },
}

/// Which end of an edge an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEndpoint {
    Source,
    Target,
}

impl std::fmt::Display for EdgeEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeEndpoint::Source => f.write_str("source"),
            EdgeEndpoint::Target => f.write_str("target"),
        }
    }
}

/// A pipeline node; only the id matters here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineNode {
    pub id: String,
}

/// A directed connection between two pipeline nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEdge {
    pub source: String,
    pub target: String,
}

/// Graph description submitted for analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub nodes: Vec<PipelineNode>,
    pub edges: Vec<PipelineEdge>,
}

/// Counts and acyclicity for one pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

impl PipelineNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl PipelineEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Pipeline {
    /// Build a pipeline from bare ids and id pairs
    pub fn from_parts<'a>(
        nodes: impl IntoIterator<Item = &'a str>,
        edges: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            nodes: nodes.into_iter().map(PipelineNode::new).collect(),
            edges: edges
                .into_iter()
                .map(|(source, target)| PipelineEdge::new(source, target))
                .collect(),
        }
    }

    /// Borrowing graph view over this pipeline
    pub fn graph(&self) -> DirectedGraph<'_> {
        DirectedGraph::new(
            self.nodes.iter().map(|node| node.id.as_str()),
            self.edges
                .iter()
                .map(|edge| (edge.source.as_str(), edge.target.as_str())),
        )
    }

    /// First edge endpoint that names an undeclared node, if any
    pub fn find_dangling_edge(&self) -> Option<PipelineError> {
        let declared: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();

        self.edges.iter().enumerate().find_map(|(index, edge)| {
            [
                (EdgeEndpoint::Source, &edge.source),
                (EdgeEndpoint::Target, &edge.target),
            ]
            .into_iter()
            .find(|(_, id)| !declared.contains(id.as_str()))
            .map(|(endpoint, id)| PipelineError::DanglingEdge {
                index,
                endpoint,
                id: id.clone(),
            })
        })
    }

    /// Count nodes and edges as submitted and classify the graph
    ///
    /// Counts are the literal collection lengths, duplicates included.
    pub fn summarize(&self, policy: DanglingEdgePolicy) -> Result<PipelineSummary, PipelineError> {
        if policy == DanglingEdgePolicy::Reject {
            if let Some(err) = self.find_dangling_edge() {
                return Err(err);
            }
        }

        let summary = PipelineSummary {
            num_nodes: self.nodes.len(),
            num_edges: self.edges.len(),
            is_dag: self.graph().is_acyclic(),
        };

        debug!(
            num_nodes = summary.num_nodes,
            num_edges = summary.num_edges,
            is_dag = summary.is_dag,
            "Pipeline summarized"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    include!("pipeline.test.rs");
}
