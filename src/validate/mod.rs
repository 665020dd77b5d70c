//! Graph-level validation: is the definition a runnable pipeline?
//!
//! A runnable workflow is a single acyclic chain that starts at the User
//! Query node, passes through an LLM Engine, ends at an Output, and leaves
//! no node unvisited. Rules run in a fixed order and the first failure is
//! returned; nothing here mutates the definition.

pub mod traversal;

use crate::error::ValidationError;
use crate::model::graph::WorkflowGraph;
use crate::model::types::{NodeKind, Workflow};

/// Validate a definition snapshot against a prebuilt adjacency graph.
pub fn validate_workflow(
    workflow: &Workflow,
    graph: &WorkflowGraph,
) -> Result<(), ValidationError> {
    required_components(workflow)?;

    let start = workflow
        .first_of_kind(NodeKind::UserQuery)
        .ok_or(ValidationError::MissingUserQueryNode)?;

    let walk = traversal::walk_from(start, workflow, graph)?;

    let terminal = walk.terminal();
    if terminal.kind != NodeKind::Output {
        return Err(ValidationError::MustEndWithOutput {
            node_id: terminal.id.clone(),
        });
    }
    if !walk.passes_through(NodeKind::LlmEngine) {
        return Err(ValidationError::MissingLlmBeforeOutput);
    }
    if walk.len() != workflow.nodes.len() {
        return Err(ValidationError::DisconnectedNodes {
            expected: workflow.nodes.len(),
            visited: walk.len(),
        });
    }

    tracing::debug!(
        nodes = workflow.nodes.len(),
        edges = workflow.edges.len(),
        "workflow validated"
    );
    Ok(())
}

/// Build the adjacency graph and validate in one step.
pub fn validate(workflow: &Workflow) -> Result<(), ValidationError> {
    let graph = WorkflowGraph::build(workflow);
    validate_workflow(workflow, &graph)
}

/// Every required kind must be present. Missing kinds are reported in the
/// fixed order User Query, LLM Engine, Output.
fn required_components(workflow: &Workflow) -> Result<(), ValidationError> {
    for kind in NodeKind::REQUIRED {
        if workflow.first_of_kind(kind).is_none() {
            return Err(ValidationError::MissingComponent(kind));
        }
    }
    Ok(())
}
