//! Workflow definition model: JSON ↔ Rust types + graph construction.

pub mod config;
pub mod graph;
pub mod types;

pub use config::{EngineConfig, EngineConfigPatch, ModelProvider};
pub use graph::WorkflowGraph;
pub use types::*;

use crate::error::ParseError;

/// Deserialize a workflow definition JSON string.
pub fn parse(json: &str) -> Result<Workflow, ParseError> {
    Ok(serde_json::from_str::<Workflow>(json)?)
}

/// Parse JSON and build the adjacency graph in one step.
pub fn parse_and_build(json: &str) -> Result<(Workflow, WorkflowGraph), ParseError> {
    let workflow = parse(json)?;
    let graph = WorkflowGraph::build(&workflow);
    Ok((workflow, graph))
}
