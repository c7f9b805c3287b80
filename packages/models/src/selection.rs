// ABOUTME: Per-agent model selection state and its transitions
// ABOUTME: Fills unconfigured values from registry defaults and decides what gets persisted

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SelectionError;
use crate::registry::ModelRegistry;
use crate::types::{AgentModelDefinition, ReasoningEffort};

/// Values as persisted in an agent's settings file; `None` means "not yet configured"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSelection {
    pub model: Option<String>,
    pub preview_enabled: Option<bool>,
    pub reasoning_effort: Option<String>,
}

/// The effective model, preview and reasoning choice for one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSelection {
    pub agent_id: String,
    pub model: String,
    pub preview_enabled: bool,
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl AgentSelection {
    /// Resolve stored values against the registry. `None` for unknown agents.
    pub fn resolve(
        registry: &ModelRegistry,
        agent_id: &str,
        stored: &StoredSelection,
    ) -> Option<Self> {
        let agent = registry.get_agent(agent_id)?;

        let preview_enabled = agent.supports_preview() && stored.preview_enabled.unwrap_or(false);

        let model = match stored.model.as_deref() {
            Some(model) if !model.is_empty() => model.to_string(),
            _ => agent.default_model_for(preview_enabled).to_string(),
        };

        let stored_effort = match stored
            .reasoning_effort
            .as_deref()
            .map(str::parse::<ReasoningEffort>)
        {
            Some(Ok(effort)) => Some(effort),
            Some(Err(e)) => {
                debug!("Ignoring stored reasoning effort for {}: {}", agent_id, e);
                None
            }
            None => None,
        };
        let reasoning_effort = resolve_effort(registry, agent, &model, stored_effort);

        Some(Self {
            agent_id: agent_id.to_string(),
            model,
            preview_enabled,
            reasoning_effort,
        })
    }

    /// Selection for an agent that has nothing persisted yet
    pub fn defaults(registry: &ModelRegistry, agent_id: &str) -> Option<Self> {
        Self::resolve(registry, agent_id, &StoredSelection::default())
    }

    /// Switch model; the reasoning effort resets to the new model's default
    pub fn with_model(self, registry: &ModelRegistry, model_id: &str) -> Result<Self, SelectionError> {
        let agent = self.agent(registry)?;
        if agent.find_model(model_id).is_none() {
            return Err(SelectionError::UnknownModel {
                agent_id: self.agent_id,
                model_id: model_id.to_string(),
            });
        }

        let reasoning_effort = resolve_effort(registry, agent, model_id, None);
        Ok(Self {
            model: model_id.to_string(),
            reasoning_effort,
            ..self
        })
    }

    /// Toggle preview mode. The current model is kept even if it is a preview model.
    pub fn with_preview(self, registry: &ModelRegistry, enabled: bool) -> Result<Self, SelectionError> {
        let agent = self.agent(registry)?;
        Ok(Self {
            preview_enabled: agent.supports_preview() && enabled,
            ..self
        })
    }

    pub fn with_reasoning_effort(
        self,
        registry: &ModelRegistry,
        effort: ReasoningEffort,
    ) -> Result<Self, SelectionError> {
        let agent = self.agent(registry)?;
        let offered = agent.supports_reasoning()
            && agent
                .find_model(&self.model)
                .is_some_and(|m| m.offers_reasoning_effort(effort));

        if !offered {
            return Err(SelectionError::UnsupportedReasoningEffort {
                model_id: self.model,
                effort,
            });
        }

        Ok(Self {
            reasoning_effort: Some(effort),
            ..self
        })
    }

    /// Values to write back. The reasoning effort is only written when the
    /// selected model declares efforts of its own.
    pub fn to_stored(&self, registry: &ModelRegistry) -> StoredSelection {
        let model_has_efforts = registry
            .find_model(&self.agent_id, &self.model)
            .is_some_and(|m| m.supports_reasoning());

        StoredSelection {
            model: Some(self.model.clone()),
            preview_enabled: Some(self.preview_enabled),
            reasoning_effort: self
                .reasoning_effort
                .filter(|_| model_has_efforts)
                .map(|effort| effort.as_str().to_string()),
        }
    }

    fn agent<'r>(&self, registry: &'r ModelRegistry) -> Result<&'r AgentModelDefinition, SelectionError> {
        registry
            .get_agent(&self.agent_id)
            .ok_or_else(|| SelectionError::UnknownAgent(self.agent_id.clone()))
    }
}

/// Stored effort when the model offers it, otherwise the model's default.
/// `None` when the agent or the model has no reasoning control.
fn resolve_effort(
    registry: &ModelRegistry,
    agent: &AgentModelDefinition,
    model_id: &str,
    stored: Option<ReasoningEffort>,
) -> Option<ReasoningEffort> {
    if !agent.supports_reasoning() {
        return None;
    }
    let model = agent.find_model(model_id).filter(|m| m.supports_reasoning())?;

    match stored {
        Some(effort) if model.offers_reasoning_effort(effort) => Some(effort),
        _ => Some(registry.get_default_reasoning_effort(&agent.agent_id, model_id)),
    }
}
