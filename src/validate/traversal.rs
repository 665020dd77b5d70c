//! Linear traversal along first outgoing edges.
//!
//! The editor's data model can represent branching, but the runnable shape
//! is a chain: from each node only the first-inserted outgoing edge is
//! followed. Nodes hanging off later edges are left for the coverage check
//! in [`super::validate_workflow`] to report as disconnected.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::model::graph::WorkflowGraph;
use crate::model::types::{NodeKind, Workflow, WorkflowNode};

/// The nodes visited by one traversal, in visit order.
#[derive(Debug)]
pub struct Walk<'a> {
    path: Vec<&'a WorkflowNode>,
}

impl<'a> Walk<'a> {
    /// The node the traversal stopped at. The path always holds at least
    /// the start node.
    pub fn terminal(&self) -> &'a WorkflowNode {
        self.path[self.path.len() - 1]
    }

    pub fn passes_through(&self, kind: NodeKind) -> bool {
        self.path.iter().any(|n| n.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn path(&self) -> &[&'a WorkflowNode] {
        &self.path
    }
}

/// Walk from `start`, following the first outgoing edge of each node until
/// a node with no outgoing edge is reached.
///
/// Fails with `BrokenConnection` when the followed edge names a node that
/// is not in the definition, and with `CycleDetected` when it points back
/// at an already-visited node.
pub fn walk_from<'a>(
    start: &'a WorkflowNode,
    workflow: &'a Workflow,
    graph: &WorkflowGraph,
) -> Result<Walk<'a>, ValidationError> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut path = Vec::new();
    let mut current = start;

    loop {
        visited.insert(current.id.as_str());
        path.push(current);

        let Some(next_id) = graph.first_successor(&current.id) else {
            return Ok(Walk { path });
        };

        let Some(next) = workflow.node(next_id) else {
            return Err(ValidationError::BrokenConnection {
                source: current.id.clone(),
                target: next_id.to_string(),
            });
        };
        if visited.contains(next_id) {
            return Err(ValidationError::CycleDetected {
                node_id: next_id.to_string(),
            });
        }
        current = next;
    }
}
