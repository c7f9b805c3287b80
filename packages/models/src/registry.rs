// ABOUTME: Agent model registry service
// ABOUTME: Loads the embedded agents document and answers model, preview and reasoning lookups

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::document::AgentsDocument;
use crate::error::RegistryError;
use crate::types::{AgentModelDefinition, AgentModelOption, ReasoningEffort, ReasoningEffortOption};
use crate::validation;

/// Registry document compiled into the binary
pub const AGENTS_JSON: &str = include_str!("../config/agents.json");

/// Global registry of agent models, loaded and validated on first use
pub static REGISTRY: LazyLock<ModelRegistry> = LazyLock::new(|| {
    ModelRegistry::new().unwrap_or_else(|e| {
        panic!(
            "FATAL: Failed to load agent model registry. \
             Check packages/models/config/agents.json: {}",
            e
        )
    })
});

#[derive(Debug)]
pub struct ModelRegistry {
    version: Option<String>,
    agents: Vec<AgentModelDefinition>,
    index: HashMap<String, usize>,
}

impl ModelRegistry {
    /// Create the registry from the embedded document and fail on any inconsistency
    pub fn new() -> Result<Self, RegistryError> {
        let registry = Self::from_json(AGENTS_JSON)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Parse a registry document without validating it
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let document = AgentsDocument::from_json(json)?;
        let version = document.version.clone();
        let mut registry = Self::from_definitions(document.into_definitions()?);
        registry.version = Some(version);
        Ok(registry)
    }

    pub fn from_definitions(agents: Vec<AgentModelDefinition>) -> Self {
        let mut index = HashMap::with_capacity(agents.len());
        for (position, agent) in agents.iter().enumerate() {
            // First definition wins; duplicates are reported by validate()
            index.entry(agent.agent_id.clone()).or_insert(position);
        }

        Self {
            version: None,
            agents,
            index,
        }
    }

    /// Version of the document the registry was parsed from, if any
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Check that every default resolves and every model is well formed.
    /// Reports all problems at once rather than the first one found.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let issues = validation::check_consistency(&self.agents);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Inconsistent(issues))
        }
    }

    /// Get an agent definition by ID
    pub fn get_agent(&self, agent_id: &str) -> Option<&AgentModelDefinition> {
        let agent = self.index.get(agent_id).map(|&i| &self.agents[i]);
        if agent.is_none() {
            debug!("Unknown agent requested from model registry: {}", agent_id);
        }
        agent
    }

    /// List all agents in document order
    pub fn list_agents(&self) -> Vec<&AgentModelDefinition> {
        self.index_order().collect()
    }

    pub fn agent_exists(&self, agent_id: &str) -> bool {
        self.index.contains_key(agent_id)
    }

    /// Models offered by an agent for the given preview state.
    /// Unknown agents have no models.
    pub fn get_agent_models(&self, agent_id: &str, preview_enabled: bool) -> Vec<&AgentModelOption> {
        self.get_agent(agent_id)
            .map(|agent| agent.models(preview_enabled))
            .unwrap_or_default()
    }

    pub fn agent_supports_preview(&self, agent_id: &str) -> bool {
        self.get_agent(agent_id)
            .is_some_and(AgentModelDefinition::supports_preview)
    }

    pub fn agent_supports_reasoning(&self, agent_id: &str) -> bool {
        self.get_agent(agent_id)
            .is_some_and(AgentModelDefinition::supports_reasoning)
    }

    /// Default model for the given preview state, `None` for unknown agents
    pub fn get_default_model(&self, agent_id: &str, preview_enabled: bool) -> Option<&str> {
        self.get_agent(agent_id)
            .map(|agent| agent.default_model_for(preview_enabled))
    }

    /// Find a model by id, searching preview models regardless of the current preview state
    pub fn find_model(&self, agent_id: &str, model_id: &str) -> Option<&AgentModelOption> {
        self.get_agent(agent_id)?.find_model(model_id)
    }

    /// Whether a model is offered for the given preview state
    pub fn is_model_available(&self, agent_id: &str, model_id: &str, preview_enabled: bool) -> bool {
        self.get_agent_models(agent_id, preview_enabled)
            .iter()
            .any(|m| m.id == model_id)
    }

    /// Reasoning efforts declared by a model.
    ///
    /// The lookup always includes preview models so that a model selected while
    /// preview was on still resolves its efforts after preview is switched off.
    pub fn get_model_reasoning_efforts(
        &self,
        agent_id: &str,
        model_id: &str,
    ) -> Option<&[ReasoningEffortOption]> {
        self.find_model(agent_id, model_id)?
            .reasoning_efforts
            .as_deref()
    }

    /// Default reasoning effort for a model, falling back to medium
    pub fn get_default_reasoning_effort(&self, agent_id: &str, model_id: &str) -> ReasoningEffort {
        self.find_model(agent_id, model_id)
            .and_then(|m| m.default_reasoning_effort)
            .unwrap_or(ReasoningEffort::FALLBACK)
    }

    fn index_order(&self) -> impl Iterator<Item = &AgentModelDefinition> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(position, agent)| self.index.get(&agent.agent_id) == Some(position))
            .map(|(_, agent)| agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = ModelRegistry::new().expect("Registry should load");
        assert!(!registry.agents.is_empty(), "Should have agents");
    }

    #[test]
    fn test_version_comes_from_document() {
        let registry = ModelRegistry::new().unwrap();
        assert_eq!(registry.version(), Some("1.0.0"));

        let built = ModelRegistry::from_definitions(Vec::new());
        assert_eq!(built.version(), None);
    }

    #[test]
    fn test_get_agent() {
        let registry = ModelRegistry::new().unwrap();
        let agent = registry.get_agent("gemini-cli");
        assert!(agent.is_some(), "Should find Gemini CLI agent");
        assert_eq!(agent.unwrap().name, "Gemini CLI");
        assert!(registry.get_agent("nonexistent-agent").is_none());
    }

    #[test]
    fn test_list_agents_keeps_document_order() {
        let registry = ModelRegistry::new().unwrap();
        let ids: Vec<&str> = registry
            .list_agents()
            .iter()
            .map(|a| a.agent_id.as_str())
            .collect();
        assert_eq!(ids, vec!["claude-code", "codex-cli", "gemini-cli"]);
    }

    #[test]
    fn test_agent_exists() {
        let registry = ModelRegistry::new().unwrap();
        assert!(registry.agent_exists("codex-cli"));
        assert!(!registry.agent_exists("nonexistent-agent"));
    }

    #[test]
    fn test_capability_flags() {
        let registry = ModelRegistry::new().unwrap();

        assert!(registry.agent_supports_preview("gemini-cli"));
        assert!(!registry.agent_supports_reasoning("gemini-cli"));

        assert!(registry.agent_supports_reasoning("codex-cli"));
        assert!(!registry.agent_supports_preview("codex-cli"));

        assert!(!registry.agent_supports_preview("claude-code"));
        assert!(!registry.agent_supports_reasoning("claude-code"));

        assert!(!registry.agent_supports_preview("nonexistent-agent"));
        assert!(!registry.agent_supports_reasoning("nonexistent-agent"));
    }

    #[test]
    fn test_preview_model_availability() {
        let registry = ModelRegistry::new().unwrap();
        assert!(!registry.is_model_available("gemini-cli", "gemini-3-pro-preview", false));
        assert!(registry.is_model_available("gemini-cli", "gemini-3-pro-preview", true));
        assert!(registry.is_model_available("gemini-cli", "gemini-2.5-pro", false));
    }

    #[test]
    fn test_reasoning_lookup_ignores_preview_state() {
        let json = r#"{
            "version": "1",
            "agents": [{
                "agentId": "a",
                "name": "A",
                "settingsPath": ".a/config.toml",
                "settingsKey": "model",
                "reasoningKey": "effort",
                "previewKey": "preview",
                "manualModels": [{ "id": "base", "name": "Base" }],
                "previewModels": [{
                    "id": "next",
                    "name": "Next",
                    "isPreview": true,
                    "reasoningEfforts": [
                        { "id": "low", "name": "Low" },
                        { "id": "high", "name": "High", "isDefault": true }
                    ],
                    "defaultReasoningEffort": "high"
                }],
                "defaultModel": "base"
            }]
        }"#;
        let registry = ModelRegistry::from_json(json).unwrap();

        assert!(!registry.is_model_available("a", "next", false));
        assert_eq!(
            registry.get_model_reasoning_efforts("a", "next").map(<[_]>::len),
            Some(2)
        );
        assert_eq!(
            registry.get_default_reasoning_effort("a", "next"),
            ReasoningEffort::High
        );
        assert_eq!(registry.get_model_reasoning_efforts("a", "base"), None);
    }

    #[test]
    fn test_first_duplicate_agent_wins() {
        let registry = ModelRegistry::new().unwrap();
        let mut agents: Vec<AgentModelDefinition> =
            registry.list_agents().into_iter().cloned().collect();
        let mut shadow = agents[0].clone();
        shadow.name = "Shadow".to_string();
        agents.push(shadow);

        let registry = ModelRegistry::from_definitions(agents);
        assert_eq!(registry.get_agent("claude-code").unwrap().name, "Claude Code");
        assert_eq!(registry.list_agents().len(), 3);
        assert!(registry.validate().is_err());
    }
}
