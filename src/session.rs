//! Owned editor session: the single mutable workflow being edited.
//!
//! All mutations happen here, synchronously, on the editor's event loop.
//! The validator and request assembly only ever borrow the session's
//! current snapshot.

use crate::error::{SessionError, ValidationError};
use crate::execution::{self, RunRequest};
use crate::model::config::{EngineConfig, EngineConfigPatch};
use crate::model::types::{Workflow, WorkflowEdge, WorkflowNode};
use crate::validate;

#[derive(Debug, Default)]
pub struct WorkflowSession {
    workflow: Workflow,
}

impl WorkflowSession {
    /// A fresh, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session wholesale with a saved workflow or template.
    pub fn load(workflow: Workflow) -> Self {
        WorkflowSession { workflow }
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn into_workflow(self) -> Workflow {
        self.workflow
    }

    /// Insert a node dropped onto the canvas. Ids must be unique.
    pub fn add_node(&mut self, node: WorkflowNode) -> Result<(), SessionError> {
        if self.workflow.node(&node.id).is_some() {
            return Err(SessionError::DuplicateNodeId(node.id));
        }
        self.workflow.nodes.push(node);
        Ok(())
    }

    /// Insert a connection. Endpoints are not checked here: the editor may
    /// briefly hold an edge whose target is still mid-drag. Dangling
    /// endpoints surface at validation time instead.
    pub fn add_edge(&mut self, edge: WorkflowEdge) -> Result<(), SessionError> {
        if self.workflow.edges.iter().any(|e| e.id == edge.id) {
            return Err(SessionError::DuplicateEdgeId(edge.id));
        }
        self.workflow.edges.push(edge);
        Ok(())
    }

    /// Update a node's canvas position. Layout only.
    pub fn move_node(&mut self, id: &str, x: f64, y: f64) -> bool {
        match self.workflow.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.position.x = x;
                node.position.y = y;
                true
            }
            None => false,
        }
    }

    /// Remove a node together with every edge touching it and its stored
    /// configuration, so no reference to the id survives the deletion.
    pub fn remove_node(&mut self, id: &str) -> Option<WorkflowNode> {
        let at = self.workflow.nodes.iter().position(|n| n.id == id)?;
        let node = self.workflow.nodes.remove(at);

        let before = self.workflow.edges.len();
        self.workflow
            .edges
            .retain(|e| e.source != id && e.target != id);
        self.workflow.configs.remove(id);

        tracing::debug!(
            node_id = id,
            cascaded_edges = before - self.workflow.edges.len(),
            "removed node"
        );
        Some(node)
    }

    /// Remove a single connection; nodes are untouched.
    pub fn remove_edge(&mut self, id: &str) -> Option<WorkflowEdge> {
        let at = self.workflow.edges.iter().position(|e| e.id == id)?;
        Some(self.workflow.edges.remove(at))
    }

    /// Merge a partial configuration update into the node's entry. Omitted
    /// fields keep the previous value, or the global default when the node
    /// had no entry yet. Returns the resolved entry.
    pub fn set_node_config(&mut self, node_id: &str, patch: EngineConfigPatch) -> EngineConfig {
        let merged = patch.apply_to(&self.workflow.config_for(node_id));
        self.workflow
            .configs
            .insert(node_id.to_string(), merged.clone());
        merged
    }

    /// Stored configuration merged over defaults. Never fails.
    pub fn node_config(&self, node_id: &str) -> EngineConfig {
        self.workflow.config_for(node_id)
    }

    /// Read-only validation of the current snapshot.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::validate(&self.workflow)
    }

    /// Validate, then assemble the execution request for `query`. On
    /// failure the request is never built and the reason is returned.
    pub fn prepare_run(&self, query: &str) -> Result<RunRequest, ValidationError> {
        execution::assemble_run_request(&self.workflow, query)
    }
}
