//! Per-node engine configuration and its defaulting/merge rules.

use serde::{Deserialize, Serialize};

/// Backend model providers the engine node can select between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    #[default]
    Gemini,
    OpenAi,
}

/// Configuration stored against an LLM Engine node. Entries for other node
/// kinds are accepted and carried along but never read by the core.
///
/// Field ranges are deliberately not checked here; an out-of-range
/// temperature is the execution backend's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub model: ModelProvider,
    pub temperature: f64,
    pub use_knowledge_base: bool,
    pub max_context_chunks: u32,
    pub use_web_search: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            model: ModelProvider::Gemini,
            temperature: 0.7,
            use_knowledge_base: true,
            max_context_chunks: 3,
            use_web_search: false,
        }
    }
}

/// Partial update coming from the config panel. `None` fields keep the
/// previous value, or the global default when the node had no entry yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfigPatch {
    pub model: Option<ModelProvider>,
    pub temperature: Option<f64>,
    pub use_knowledge_base: Option<bool>,
    pub max_context_chunks: Option<u32>,
    pub use_web_search: Option<bool>,
}

impl EngineConfigPatch {
    /// Shallow-merge this patch over `base`, producing a full entry.
    pub fn apply_to(&self, base: &EngineConfig) -> EngineConfig {
        EngineConfig {
            model: self.model.unwrap_or(base.model),
            temperature: self.temperature.unwrap_or(base.temperature),
            use_knowledge_base: self.use_knowledge_base.unwrap_or(base.use_knowledge_base),
            max_context_chunks: self.max_context_chunks.unwrap_or(base.max_context_chunks),
            use_web_search: self.use_web_search.unwrap_or(base.use_web_search),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_record() {
        let config = EngineConfig::default();
        assert_eq!(config.model, ModelProvider::Gemini);
        assert_eq!(config.temperature, 0.7);
        assert!(config.use_knowledge_base);
        assert_eq!(config.max_context_chunks, 3);
        assert!(!config.use_web_search);
    }

    #[test]
    fn partial_json_entry_fills_with_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"model": "openai"}"#).unwrap();
        assert_eq!(config.model, ModelProvider::OpenAi);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_context_chunks, 3);
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = EngineConfig {
            temperature: 0.2,
            use_web_search: true,
            ..EngineConfig::default()
        };
        assert_eq!(EngineConfigPatch::default().apply_to(&base), base);
    }

    #[test]
    fn out_of_range_temperature_passes_through() {
        let patch = EngineConfigPatch {
            temperature: Some(7.5),
            ..EngineConfigPatch::default()
        };
        assert_eq!(patch.apply_to(&EngineConfig::default()).temperature, 7.5);
    }
}
