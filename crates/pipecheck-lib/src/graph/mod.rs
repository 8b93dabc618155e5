//! # Graph Module
//!
//! Pipeline graph analysis.
//!
//! ## Modules
//!
//! - [`dag`] - Kahn's-algorithm acyclicity check over string-keyed graphs
//! - [`pipeline`] - Request/response payloads and pipeline summaries

pub mod dag;
pub mod pipeline;

pub use dag::{DirectedGraph, is_dag};
pub use pipeline::{
    EdgeEndpoint, Pipeline, PipelineEdge, PipelineError, PipelineNode, PipelineSummary,
};
