//! Built-in starter workflows offered by the template gallery.
//!
//! Shared between the editor (via the wasm surface) and the tests, so the
//! shipped starting points are guaranteed to validate.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::config::{EngineConfig, ModelProvider};
use crate::model::types::{NodeKind, Workflow, WorkflowEdge, WorkflowNode};

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: Vec<&'static str>,
    pub definition: Workflow,
}

/// The shipped template catalog, in gallery order.
pub fn builtin_templates() -> Vec<WorkflowTemplate> {
    vec![document_qa(), web_research(), content_generation()]
}

fn document_qa() -> WorkflowTemplate {
    WorkflowTemplate {
        name: "Document Q&A Assistant",
        description: "Upload documents and ask questions about their content. \
                      Perfect for research, document analysis, and knowledge extraction.",
        category: "Document Analysis",
        tags: vec!["documents", "qa", "research", "analysis"],
        definition: Workflow {
            nodes: vec![
                node(NodeKind::UserQuery, "userQuery-1", 100.0, 100.0),
                node(NodeKind::KnowledgeBase, "knowledgeBase-1", 100.0, 250.0),
                node(NodeKind::LlmEngine, "llmEngine-1", 100.0, 400.0),
                node(NodeKind::Output, "output-1", 100.0, 550.0),
            ],
            edges: vec![
                edge("e1-2", "userQuery-1", "knowledgeBase-1"),
                edge("e2-3", "knowledgeBase-1", "llmEngine-1"),
                edge("e3-4", "llmEngine-1", "output-1"),
            ],
            configs: engine_config(
                "llmEngine-1",
                EngineConfig {
                    temperature: 0.7,
                    use_knowledge_base: true,
                    ..EngineConfig::default()
                },
            ),
        },
    }
}

fn web_research() -> WorkflowTemplate {
    WorkflowTemplate {
        name: "Web Research Assistant",
        description: "Search the web for real-time information and get AI-powered \
                      insights. Great for current events, research, and fact-checking.",
        category: "Web Research",
        tags: vec!["web", "research", "current-events", "fact-checking"],
        definition: Workflow {
            nodes: vec![
                node(NodeKind::UserQuery, "userQuery-1", 100.0, 100.0),
                node(NodeKind::LlmEngine, "llmEngine-1", 100.0, 250.0),
                node(NodeKind::Output, "output-1", 100.0, 400.0),
            ],
            edges: vec![
                edge("e1-2", "userQuery-1", "llmEngine-1"),
                edge("e2-3", "llmEngine-1", "output-1"),
            ],
            configs: engine_config(
                "llmEngine-1",
                EngineConfig {
                    model: ModelProvider::Gemini,
                    temperature: 0.8,
                    use_knowledge_base: false,
                    max_context_chunks: 3,
                    use_web_search: true,
                },
            ),
        },
    }
}

fn content_generation() -> WorkflowTemplate {
    WorkflowTemplate {
        name: "Content Generation Assistant",
        description: "Generate creative content like articles, stories, and marketing \
                      copy. Perfect for writers, marketers, and content creators.",
        category: "Content Creation",
        tags: vec!["content", "writing", "creative", "marketing"],
        definition: Workflow {
            nodes: vec![
                node(NodeKind::UserQuery, "userQuery-1", 100.0, 100.0),
                node(NodeKind::LlmEngine, "llmEngine-1", 100.0, 250.0),
                node(NodeKind::Output, "output-1", 100.0, 400.0),
            ],
            edges: vec![
                edge("e1-2", "userQuery-1", "llmEngine-1"),
                edge("e2-3", "llmEngine-1", "output-1"),
            ],
            configs: engine_config(
                "llmEngine-1",
                EngineConfig {
                    temperature: 0.9,
                    use_knowledge_base: false,
                    use_web_search: false,
                    ..EngineConfig::default()
                },
            ),
        },
    }
}

fn node(kind: NodeKind, id: &str, x: f64, y: f64) -> WorkflowNode {
    WorkflowNode::new(kind, id, x, y)
}

fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
    }
}

fn engine_config(node_id: &str, config: EngineConfig) -> HashMap<String, EngineConfig> {
    HashMap::from([(node_id.to_string(), config)])
}
