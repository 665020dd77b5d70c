//! petgraph-based adjacency view over a workflow definition.
//!
//! Built on demand from the raw edge list; never maintained incrementally.
//! Edge endpoints that do not name a declared node are kept as phantom
//! vertices so a dangling connection still occupies its slot in the
//! first-outgoing-edge order and can be reported at validation time.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::Workflow;

pub struct WorkflowGraph {
    /// Node weights are node ids; edge weights are edge ids.
    pub graph: DiGraph<String, String>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    pub fn build(workflow: &Workflow) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in &workflow.nodes {
            node_indices
                .entry(node.id.clone())
                .or_insert_with(|| graph.add_node(node.id.clone()));
        }

        // Edges are inserted in definition order; edge indices are the
        // traversal order the validator relies on.
        for edge in &workflow.edges {
            let source = *node_indices
                .entry(edge.source.clone())
                .or_insert_with(|| graph.add_node(edge.source.clone()));
            let target = *node_indices
                .entry(edge.target.clone())
                .or_insert_with(|| graph.add_node(edge.target.clone()));
            graph.add_edge(source, target, edge.id.clone());
        }

        WorkflowGraph {
            graph,
            node_indices,
        }
    }

    /// Downstream node ids, ordered by edge insertion.
    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut edges: Vec<_> = self.graph.edges_directed(idx, Direction::Outgoing).collect();
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| self.graph[e.target()].as_str())
            .collect()
    }

    /// Target of the first-inserted outgoing edge, if any. This is the only
    /// branch the validation traversal ever follows.
    pub fn first_successor(&self, node_id: &str) -> Option<&str> {
        self.successors(node_id).into_iter().next()
    }

    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.predecessors(node_id).len()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.successors(node_id).len()
    }
}
