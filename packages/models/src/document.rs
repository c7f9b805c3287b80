// ABOUTME: Serde mirror of the registry JSON document (config/agents.json)
// ABOUTME: Resolves named reasoning-effort sets into per-model definitions

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::types::{AgentModelDefinition, AgentModelOption, ReasoningEffort, ReasoningEffortOption};

/// Container for the agents JSON file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentsDocument {
    pub version: String,
    #[serde(default)]
    pub reasoning_effort_sets: HashMap<String, Vec<ReasoningEffortOption>>,
    pub agents: Vec<AgentDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDocument {
    pub agent_id: String,
    pub name: String,
    pub settings_path: String,
    pub settings_key: String,
    #[serde(default)]
    pub reasoning_key: Option<String>,
    #[serde(default)]
    pub preview_key: Option<String>,
    #[serde(default)]
    pub auto_models: Vec<ModelDocument>,
    #[serde(default)]
    pub manual_models: Vec<ModelDocument>,
    #[serde(default)]
    pub preview_models: Option<Vec<ModelDocument>>,
    pub default_model: String,
    #[serde(default)]
    pub default_preview_model: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_preview: bool,
    #[serde(default)]
    pub is_auto: bool,
    #[serde(default)]
    pub reasoning_efforts: Option<ReasoningEffortsRef>,
    #[serde(default)]
    pub default_reasoning_effort: Option<ReasoningEffort>,
}

/// Either the name of a shared set under `reasoningEffortSets` or an inline list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReasoningEffortsRef {
    Named(String),
    Inline(Vec<ReasoningEffortOption>),
}

impl AgentsDocument {
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every agent, in document order
    pub fn into_definitions(self) -> Result<Vec<AgentModelDefinition>, RegistryError> {
        let sets = self.reasoning_effort_sets;
        self.agents
            .into_iter()
            .map(|agent| agent.resolve(&sets))
            .collect()
    }
}

impl AgentDocument {
    fn resolve(
        self,
        sets: &HashMap<String, Vec<ReasoningEffortOption>>,
    ) -> Result<AgentModelDefinition, RegistryError> {
        let agent_id = self.agent_id;
        let resolve_all = |models: Vec<ModelDocument>| -> Result<Vec<AgentModelOption>, RegistryError> {
            models
                .into_iter()
                .map(|m| m.resolve(&agent_id, sets))
                .collect()
        };

        let auto_models = resolve_all(self.auto_models)?;
        let manual_models = resolve_all(self.manual_models)?;
        let preview_models = self.preview_models.map(resolve_all).transpose()?;

        Ok(AgentModelDefinition {
            name: self.name,
            settings_path: self.settings_path,
            settings_key: self.settings_key,
            reasoning_key: non_empty(self.reasoning_key),
            preview_key: non_empty(self.preview_key),
            auto_models,
            manual_models,
            preview_models,
            default_model: self.default_model,
            default_preview_model: non_empty(self.default_preview_model),
            agent_id,
        })
    }
}

impl ModelDocument {
    fn resolve(
        self,
        agent_id: &str,
        sets: &HashMap<String, Vec<ReasoningEffortOption>>,
    ) -> Result<AgentModelOption, RegistryError> {
        let reasoning_efforts = match self.reasoning_efforts {
            None => None,
            Some(ReasoningEffortsRef::Inline(efforts)) => Some(efforts),
            Some(ReasoningEffortsRef::Named(set)) => match sets.get(&set) {
                Some(efforts) => Some(efforts.clone()),
                None => {
                    return Err(RegistryError::UnknownReasoningEffortSet {
                        agent_id: agent_id.to_string(),
                        model_id: self.id,
                        set,
                    })
                }
            },
        };

        Ok(AgentModelOption {
            id: self.id,
            name: self.name,
            description: self.description,
            is_preview: self.is_preview,
            is_auto: self.is_auto,
            reasoning_efforts,
            default_reasoning_effort: self.default_reasoning_effort,
        })
    }
}

/// Empty strings in the document mean "not configured"
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
