//! Execution request assembly and response classification.
//!
//! The core never talks to the network itself: the host issues the HTTP
//! call with the assembled [`RunRequest`] and hands the raw response JSON
//! back for classification.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ValidationError};
use crate::model::config::ModelProvider;
use crate::model::types::{NodeKind, Workflow};
use crate::validate;

/// Body of the backend's `/workflow/run` call: the full definition plus
/// the first engine node's resolved configuration projected to the top
/// level. `useWebSearch` stays nested; the backend reads it from `configs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub workflow: Workflow,
    pub query: String,
    pub preferred_model: ModelProvider,
    pub temperature: f64,
    pub use_knowledge_base: bool,
    pub max_context_chunks: u32,
}

/// Assemble the execution request for a validated definition.
///
/// Validation runs first; an invalid graph blocks the request and returns
/// the reason unchanged.
pub fn assemble_run_request(
    workflow: &Workflow,
    query: &str,
) -> Result<RunRequest, ValidationError> {
    validate::validate(workflow)?;

    let engine = workflow
        .first_of_kind(NodeKind::LlmEngine)
        .ok_or(ValidationError::MissingComponent(NodeKind::LlmEngine))?;
    let config = workflow.config_for(&engine.id);

    tracing::debug!(
        engine = %engine.id,
        model = ?config.model,
        temperature = config.temperature,
        "assembled run request"
    );

    Ok(RunRequest {
        workflow: workflow.clone(),
        query: query.to_string(),
        preferred_model: config.model,
        temperature: config.temperature,
        use_knowledge_base: config.use_knowledge_base,
        max_context_chunks: config.max_context_chunks,
    })
}

/// Wire shape of the backend's run response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub model_used: String,
    #[serde(default)]
    pub context_used: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// The only interpretation the core performs on a run response: did the
/// backend answer, or fail? Both sides are surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed {
        response: String,
        model_used: String,
        context_used: Option<String>,
    },
    Failed {
        error: String,
    },
}

impl From<RunResponse> for RunOutcome {
    fn from(response: RunResponse) -> Self {
        if response.success {
            RunOutcome::Completed {
                response: response.response,
                model_used: response.model_used,
                context_used: response.context_used,
            }
        } else {
            RunOutcome::Failed {
                error: response
                    .error
                    .unwrap_or_else(|| "Workflow execution failed".to_string()),
            }
        }
    }
}

/// Deserialize a raw response body from the execution service.
pub fn parse_run_response(json: &str) -> Result<RunResponse, ParseError> {
    Ok(serde_json::from_str::<RunResponse>(json)?)
}
