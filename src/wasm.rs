//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::{ParseError, ValidationError};
use crate::execution::{self, RunOutcome, RunRequest};
use crate::model;
use crate::model::types::NodeKind;
use crate::templates;

/// Validate a workflow definition JSON.
/// Returns a JSON array of error objects; empty means runnable.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> Vec<ErrorDto> {
    let (workflow, graph) = match model::parse_and_build(json) {
        Ok(pair) => pair,
        Err(e) => return vec![ErrorDto::from(e)],
    };
    match crate::validate::validate_workflow(&workflow, &graph) {
        Ok(()) => vec![],
        Err(e) => vec![ErrorDto::from(e)],
    }
}

/// Validate and assemble the execution request for `query`.
/// Returns `{status: "success", request}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn prepare_run(json: &str, query: &str) -> JsValue {
    let result = prepare_run_inner(json, query);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn prepare_run_inner(json: &str, query: &str) -> PrepareResult {
    let workflow = match model::parse(json) {
        Ok(w) => w,
        Err(e) => {
            return PrepareResult::Errors {
                errors: vec![ErrorDto::from(e)],
            };
        }
    };
    match execution::assemble_run_request(&workflow, query) {
        Ok(request) => PrepareResult::Success { request },
        Err(e) => PrepareResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    }
}

/// Classify a raw run-response body from the execution service.
#[wasm_bindgen]
pub fn classify_run_response(json: &str) -> JsValue {
    let result = classify_run_response_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn classify_run_response_inner(json: &str) -> OutcomeDto {
    let response = match execution::parse_run_response(json) {
        Ok(r) => r,
        Err(e) => {
            return OutcomeDto::Invalid {
                errors: vec![ErrorDto::from(e)],
            };
        }
    };
    match RunOutcome::from(response) {
        RunOutcome::Completed {
            response,
            model_used,
            context_used,
        } => OutcomeDto::Completed {
            response,
            model_used,
            context_used,
        },
        RunOutcome::Failed { error } => OutcomeDto::Failed { error },
    }
}

/// The four node kinds with the display metadata the palette renders.
#[wasm_bindgen]
pub fn node_palette() -> JsValue {
    let entries: Vec<PaletteDto> = NodeKind::ALL
        .iter()
        .map(|kind| PaletteDto {
            kind: *kind,
            label: kind.display_name(),
            description: kind.default_description(),
            icon: kind.icon(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&entries).unwrap_or(JsValue::NULL)
}

/// The built-in template catalog.
#[wasm_bindgen]
pub fn workflow_templates() -> JsValue {
    serde_wasm_bindgen::to_value(&templates::builtin_templates()).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    message: String,
    node_id: Option<String>,
}

impl From<ValidationError> for ErrorDto {
    fn from(e: ValidationError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            message: e.to_string(),
            node_id: e.node_id().map(str::to_string),
        }
    }
}

impl From<ParseError> for ErrorDto {
    fn from(e: ParseError) -> Self {
        ErrorDto {
            code: "PARSE_ERROR".to_string(),
            message: e.to_string(),
            node_id: None,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum PrepareResult {
    Success { request: RunRequest },
    Errors { errors: Vec<ErrorDto> },
}

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum OutcomeDto {
    Completed {
        response: String,
        model_used: String,
        context_used: Option<String>,
    },
    Failed {
        error: String,
    },
    Invalid {
        errors: Vec<ErrorDto>,
    },
}

#[derive(serde::Serialize)]
struct PaletteDto {
    kind: NodeKind,
    label: &'static str,
    description: &'static str,
    icon: &'static str,
}
