//! Error types shared across the model, session, and validation layers.

use thiserror::Error;

use crate::model::types::NodeKind;

/// Workflow definition JSON could not be deserialized.
#[derive(Debug, Error)]
#[error("Failed to parse workflow JSON: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Rejected editor mutations. The session is left unchanged when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("A component with id '{0}' already exists")]
    DuplicateNodeId(String),
    #[error("A connection with id '{0}' already exists")]
    DuplicateEdgeId(String),
}

/// The reasons a workflow can fail validation, in the order the validator
/// checks them. The first failing check wins; reasons are never collected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required component: {}", .0.display_name())]
    MissingComponent(NodeKind),
    #[error("Workflow needs a User Query component to start from")]
    MissingUserQueryNode,
    #[error("Workflow contains a cycle at component '{node_id}'")]
    CycleDetected { node_id: String },
    #[error("Connection from '{source}' points to missing component '{target}'")]
    BrokenConnection { r#source: String, target: String },
    #[error("Workflow must end with Output component")]
    MustEndWithOutput { node_id: String },
    #[error("Workflow must pass through an LLM Engine before the Output component")]
    MissingLlmBeforeOutput,
    #[error("All nodes must be connected in a single path.")]
    DisconnectedNodes { expected: usize, visited: usize },
}

impl ValidationError {
    /// Stable machine-readable code, for the editor surface.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingComponent(_) => "MISSING_COMPONENT",
            ValidationError::MissingUserQueryNode => "MISSING_USER_QUERY",
            ValidationError::CycleDetected { .. } => "CYCLE_DETECTED",
            ValidationError::BrokenConnection { .. } => "BROKEN_CONNECTION",
            ValidationError::MustEndWithOutput { .. } => "MUST_END_WITH_OUTPUT",
            ValidationError::MissingLlmBeforeOutput => "MISSING_LLM_BEFORE_OUTPUT",
            ValidationError::DisconnectedNodes { .. } => "DISCONNECTED_NODES",
        }
    }

    /// The node the failure is anchored to, when there is one.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            ValidationError::CycleDetected { node_id } => Some(node_id),
            ValidationError::BrokenConnection { source, .. } => Some(source),
            ValidationError::MustEndWithOutput { node_id } => Some(node_id),
            _ => None,
        }
    }
}
