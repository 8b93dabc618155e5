//! Pipeline payloads shaped like the ones the editor front end submits
//!
//! Nodes carry the editor's extra fields (type, position, data) and edges
//! carry handles and styling, none of which the service reads.

use serde_json::{Value, json};

/// Editor-style node object
pub fn editor_node(id: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "position": { "x": 120, "y": 80 },
        "data": { "id": id, "nodeType": kind },
        "width": 200,
        "height": 80
    })
}

/// Editor-style edge object
pub fn editor_edge(source: &str, target: &str) -> Value {
    json!({
        "id": format!("reactflow__edge-{}-{}", source, target),
        "source": source,
        "sourceHandle": format!("{}-value", source),
        "target": target,
        "targetHandle": format!("{}-input", target),
        "type": "smoothstep",
        "animated": true,
        "markerEnd": { "type": "arrow", "height": "20px", "width": "20px" }
    })
}

/// Build a pipeline document from `(id, kind)` nodes and `(source, target)` edges
pub fn editor_pipeline(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> Value {
    json!({
        "nodes": nodes.iter().map(|(id, kind)| editor_node(id, kind)).collect::<Vec<_>>(),
        "edges": edges.iter().map(|(s, t)| editor_edge(s, t)).collect::<Vec<_>>(),
    })
}

/// input -> llm -> output, plus a text node feeding the llm
pub fn llm_pipeline() -> Value {
    editor_pipeline(
        &[
            ("customInput-1", "customInput"),
            ("text-1", "text"),
            ("llm-1", "llm"),
            ("customOutput-1", "customOutput"),
        ],
        &[
            ("customInput-1", "llm-1"),
            ("text-1", "llm-1"),
            ("llm-1", "customOutput-1"),
        ],
    )
}

/// A transform and filter feeding each other
pub fn feedback_loop_pipeline() -> Value {
    editor_pipeline(
        &[
            ("customInput-1", "customInput"),
            ("transform-1", "transform"),
            ("filter-1", "filter"),
            ("customOutput-1", "customOutput"),
        ],
        &[
            ("customInput-1", "transform-1"),
            ("transform-1", "filter-1"),
            ("filter-1", "transform-1"),
            ("filter-1", "customOutput-1"),
        ],
    )
}

/// Branching database/api pipeline that merges in a condition node
pub fn branching_pipeline() -> Value {
    editor_pipeline(
        &[
            ("customInput-1", "customInput"),
            ("database-1", "database"),
            ("api-1", "api"),
            ("condition-1", "condition"),
            ("customOutput-1", "customOutput"),
            ("text-2", "text"),
        ],
        &[
            ("customInput-1", "database-1"),
            ("customInput-1", "api-1"),
            ("database-1", "condition-1"),
            ("api-1", "condition-1"),
            ("condition-1", "customOutput-1"),
        ],
    )
}
