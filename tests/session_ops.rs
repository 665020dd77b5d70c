//! Integration tests for the editor session: mutations, the cascading
//! delete invariant, and configuration merge semantics.

mod helpers;

use chatflow_core::error::{SessionError, ValidationError};
use chatflow_core::model;
use chatflow_core::model::config::{EngineConfig, EngineConfigPatch, ModelProvider};
use chatflow_core::model::types::NodeKind;
use chatflow_core::session::WorkflowSession;
use helpers::{edge, linear_chain, node};

#[test]
fn new_session_starts_empty() {
    let session = WorkflowSession::new();
    assert!(session.workflow().nodes.is_empty());
    assert!(session.workflow().edges.is_empty());
}

#[test]
fn add_node_rejects_duplicate_id() {
    let mut session = WorkflowSession::new();
    session
        .add_node(node(NodeKind::UserQuery, "query-1"))
        .expect("First insert should succeed");
    let err = session
        .add_node(node(NodeKind::Output, "query-1"))
        .unwrap_err();
    assert_eq!(err, SessionError::DuplicateNodeId("query-1".into()));
    // The rejected insert leaves the session unchanged.
    assert_eq!(session.workflow().nodes.len(), 1);
    assert_eq!(session.workflow().nodes[0].kind, NodeKind::UserQuery);
}

#[test]
fn add_edge_rejects_duplicate_id() {
    let mut session = WorkflowSession::new();
    session
        .add_edge(edge("e1", "a", "b"))
        .expect("First insert should succeed");
    let err = session.add_edge(edge("e1", "b", "c")).unwrap_err();
    assert_eq!(err, SessionError::DuplicateEdgeId("e1".into()));
    assert_eq!(session.workflow().edges.len(), 1);
}

#[test]
fn add_edge_accepts_dangling_endpoints() {
    // The editor may hold an edge whose target is mid-drag; insertion
    // never checks endpoints.
    let mut session = WorkflowSession::new();
    session
        .add_edge(edge("e1", "nobody", "nothing"))
        .expect("Dangling endpoints are an insertion-time non-issue");
    assert_eq!(session.workflow().edges.len(), 1);
}

#[test]
fn remove_node_cascades_to_edges() {
    let mut session = WorkflowSession::load(linear_chain());
    let removed = session.remove_node("engine-1");
    assert_eq!(removed.map(|n| n.kind), Some(NodeKind::LlmEngine));

    // No surviving edge references the removed id.
    assert!(
        session
            .workflow()
            .edges
            .iter()
            .all(|e| e.source != "engine-1" && e.target != "engine-1"),
        "Cascade must drop every edge touching the removed node"
    );
    assert!(session.workflow().edges.is_empty());
    assert_eq!(session.workflow().nodes.len(), 2);
}

#[test]
fn remove_node_drops_stored_config() {
    let mut session = WorkflowSession::load(linear_chain());
    session.set_node_config(
        "engine-1",
        EngineConfigPatch {
            temperature: Some(0.1),
            ..Default::default()
        },
    );
    session.remove_node("engine-1");
    assert!(!session.workflow().configs.contains_key("engine-1"));
    // Lookup falls back to the defaults afterwards.
    assert_eq!(session.node_config("engine-1"), EngineConfig::default());
}

#[test]
fn remove_unknown_node_is_none() {
    let mut session = WorkflowSession::load(linear_chain());
    assert!(session.remove_node("ghost").is_none());
    assert_eq!(session.workflow().nodes.len(), 3);
}

#[test]
fn remove_edge_leaves_nodes_alone() {
    let mut session = WorkflowSession::load(linear_chain());
    let removed = session.remove_edge("e1");
    assert_eq!(removed.map(|e| e.target), Some("engine-1".to_string()));
    assert_eq!(session.workflow().edges.len(), 1);
    assert_eq!(session.workflow().nodes.len(), 3);
}

#[test]
fn move_node_updates_position_only() {
    let mut session = WorkflowSession::load(linear_chain());
    assert!(session.move_node("query-1", 42.0, 17.0));
    let moved = session.workflow().node("query-1").unwrap();
    assert_eq!((moved.position.x, moved.position.y), (42.0, 17.0));
    assert!(!session.move_node("ghost", 0.0, 0.0));
    // Layout never affects validation.
    assert_eq!(session.validate(), Ok(()));
}

#[test]
fn unconfigured_node_yields_default_record() {
    let session = WorkflowSession::load(linear_chain());
    let config = session.node_config("engine-1");
    assert_eq!(config.model, ModelProvider::Gemini);
    assert_eq!(config.temperature, 0.7);
    assert!(config.use_knowledge_base);
    assert_eq!(config.max_context_chunks, 3);
    assert!(!config.use_web_search);
}

#[test]
fn config_patches_merge_shallowly() {
    let mut session = WorkflowSession::load(linear_chain());

    let first = session.set_node_config(
        "engine-1",
        EngineConfigPatch {
            model: Some(ModelProvider::OpenAi),
            temperature: Some(0.2),
            ..Default::default()
        },
    );
    assert_eq!(first.model, ModelProvider::OpenAi);
    assert_eq!(first.temperature, 0.2);
    assert!(first.use_knowledge_base);

    // A later patch keeps the earlier fields it does not mention.
    let second = session.set_node_config(
        "engine-1",
        EngineConfigPatch {
            use_web_search: Some(true),
            ..Default::default()
        },
    );
    assert_eq!(second.model, ModelProvider::OpenAi);
    assert_eq!(second.temperature, 0.2);
    assert!(second.use_web_search);
    assert_eq!(session.node_config("engine-1"), second);
}

#[test]
fn load_replaces_session_wholesale() {
    let json = include_str!("fixtures/document_qa.json");
    let loaded = model::parse(json).expect("Should parse");
    let session = WorkflowSession::load(loaded);
    assert_eq!(session.workflow().nodes.len(), 4);
    let back = session.into_workflow();
    assert_eq!(back.edges.len(), 3);
}

#[test]
fn invalid_session_blocks_run_preparation() {
    let mut session = WorkflowSession::load(linear_chain());
    session.remove_edge("e2");
    let err = session.prepare_run("hello").unwrap_err();
    assert_eq!(
        err,
        ValidationError::MustEndWithOutput {
            node_id: "engine-1".into()
        }
    );
    // The graph itself is untouched and can be corrected.
    assert_eq!(session.workflow().nodes.len(), 3);
}
