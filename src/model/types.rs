//! Serde types mirroring the editor's workflow definition JSON.
//!
//! A definition is the `{nodes, edges, configs}` object the canvas edits,
//! the persistence layer stores, and the run request embeds. Unknown fields
//! coming from the editor (drag state, stale display data) are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;

// =============================================================================
// TOP-LEVEL DEFINITION
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default)]
    pub edges: Vec<WorkflowEdge>,
    #[serde(default)]
    pub configs: HashMap<String, EngineConfig>,
}

impl Workflow {
    /// Look up a node by id, in stable insertion order.
    pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First node of the given kind, by insertion order.
    pub fn first_of_kind(&self, kind: NodeKind) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.kind == kind)
    }

    /// Stored configuration for a node, with absent entries resolving to
    /// the global defaults. Never fails.
    pub fn config_for(&self, node_id: &str) -> EngineConfig {
        self.configs.get(node_id).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

impl WorkflowNode {
    /// A fresh node of `kind` at the given canvas position, with the
    /// palette's default label and description.
    pub fn new(kind: NodeKind, id: impl Into<String>, x: f64, y: f64) -> Self {
        WorkflowNode {
            id: id.into(),
            kind,
            position: Position { x, y },
            data: NodeData {
                label: kind.display_name().to_string(),
                description: kind.default_description().to_string(),
            },
        }
    }
}

/// Canvas coordinates. Layout only; validation never reads these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Display strings shown on the node card. Not semantically validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// NODE KINDS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    UserQuery,
    KnowledgeBase,
    LlmEngine,
    Output,
}

impl NodeKind {
    /// Kinds every runnable workflow must contain, in the order missing
    /// ones are reported.
    pub const REQUIRED: [NodeKind; 3] =
        [NodeKind::UserQuery, NodeKind::LlmEngine, NodeKind::Output];

    /// All kinds, in palette order.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::UserQuery,
        NodeKind::KnowledgeBase,
        NodeKind::LlmEngine,
        NodeKind::Output,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            NodeKind::UserQuery => "User Query",
            NodeKind::KnowledgeBase => "Knowledge Base",
            NodeKind::LlmEngine => "LLM Engine",
            NodeKind::Output => "Output",
        }
    }

    pub fn default_description(&self) -> &'static str {
        match self {
            NodeKind::UserQuery => "Accepts user queries via interface.",
            NodeKind::KnowledgeBase => "Upload and process documents.",
            NodeKind::LlmEngine => "Generate responses using AI models.",
            NodeKind::Output => "Display final response to user.",
        }
    }

    /// Icon slug the canvas renders for this kind.
    pub fn icon(&self) -> &'static str {
        match self {
            NodeKind::UserQuery => "message-circle",
            NodeKind::KnowledgeBase => "database",
            NodeKind::LlmEngine => "cpu",
            NodeKind::Output => "monitor",
        }
    }
}
