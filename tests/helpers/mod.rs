#![allow(dead_code)]

use chatflow_core::model::types::{NodeKind, Workflow, WorkflowEdge, WorkflowNode};

// =============================================================================
// Workflow builders
// =============================================================================

pub fn node(kind: NodeKind, id: &str) -> WorkflowNode {
    WorkflowNode::new(kind, id, 0.0, 0.0)
}

pub fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
    }
}

pub fn workflow(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    Workflow {
        nodes,
        edges,
        configs: Default::default(),
    }
}

/// The minimal runnable shape: User Query → LLM Engine → Output.
pub fn linear_chain() -> Workflow {
    workflow(
        vec![
            node(NodeKind::UserQuery, "query-1"),
            node(NodeKind::LlmEngine, "engine-1"),
            node(NodeKind::Output, "output-1"),
        ],
        vec![
            edge("e1", "query-1", "engine-1"),
            edge("e2", "engine-1", "output-1"),
        ],
    )
}
