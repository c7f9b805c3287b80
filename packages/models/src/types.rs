// ABOUTME: Type definitions for agents, their selectable models and reasoning efforts
// ABOUTME: Resolved, immutable records built from the embedded registry document

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasoning effort level a model can run at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
    ExtraHigh,
}

impl ReasoningEffort {
    /// Effort used when a model (or agent) declares no default of its own
    pub const FALLBACK: ReasoningEffort = ReasoningEffort::Medium;

    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
            ReasoningEffort::ExtraHigh => "extra_high",
        }
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid reasoning effort: {0}. Must be one of: low, medium, high, extra_high")]
pub struct ParseReasoningEffortError(pub String);

impl FromStr for ReasoningEffort {
    type Err = ParseReasoningEffortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ReasoningEffort::Low),
            "medium" => Ok(ReasoningEffort::Medium),
            "high" => Ok(ReasoningEffort::High),
            "extra_high" => Ok(ReasoningEffort::ExtraHigh),
            other => Err(ParseReasoningEffortError(other.to_string())),
        }
    }
}

/// One selectable reasoning effort for a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningEffortOption {
    pub id: ReasoningEffort,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Advisory: the option a selector highlights by default
    #[serde(default)]
    pub is_default: bool,
    /// Advisory caution shown next to the option (e.g. rate limits)
    #[serde(default)]
    pub warning: Option<String>,
}

/// A model an agent can be pointed at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentModelOption {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_preview: bool,
    /// Delegates the concrete model choice to the agent itself
    pub is_auto: bool,
    pub reasoning_efforts: Option<Vec<ReasoningEffortOption>>,
    pub default_reasoning_effort: Option<ReasoningEffort>,
}

impl AgentModelOption {
    /// Whether this model exposes a non-empty reasoning effort list
    pub fn supports_reasoning(&self) -> bool {
        self.reasoning_efforts
            .as_ref()
            .is_some_and(|efforts| !efforts.is_empty())
    }

    /// Whether `effort` is one of this model's declared efforts
    pub fn offers_reasoning_effort(&self, effort: ReasoningEffort) -> bool {
        self.reasoning_efforts
            .as_ref()
            .is_some_and(|efforts| efforts.iter().any(|option| option.id == effort))
    }
}

/// Per-agent model capabilities and the location of the agent's own settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentModelDefinition {
    pub agent_id: String,
    pub name: String,
    /// Settings file relative to the user's home directory
    pub settings_path: String,
    /// Dot-notation key of the model value inside the settings file
    pub settings_key: String,
    pub reasoning_key: Option<String>,
    pub preview_key: Option<String>,
    pub auto_models: Vec<AgentModelOption>,
    pub manual_models: Vec<AgentModelOption>,
    pub preview_models: Option<Vec<AgentModelOption>>,
    pub default_model: String,
    pub default_preview_model: Option<String>,
}

impl AgentModelDefinition {
    pub fn supports_preview(&self) -> bool {
        self.preview_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    pub fn supports_reasoning(&self) -> bool {
        self.reasoning_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    /// Models visible for the given preview state, in selector order:
    /// base auto, preview auto, base manual, preview manual
    pub fn models(&self, preview_enabled: bool) -> Vec<&AgentModelOption> {
        let preview: &[AgentModelOption] = match (&self.preview_models, preview_enabled) {
            (Some(models), true) => models.as_slice(),
            _ => &[],
        };

        self.auto_models
            .iter()
            .chain(preview.iter().filter(|m| m.is_auto))
            .chain(self.manual_models.iter())
            .chain(preview.iter().filter(|m| !m.is_auto))
            .collect()
    }

    /// Default model id for the given preview state
    pub fn default_model_for(&self, preview_enabled: bool) -> &str {
        match (&self.default_preview_model, preview_enabled) {
            (Some(preview_default), true) => preview_default.as_str(),
            _ => self.default_model.as_str(),
        }
    }

    /// Look a model up by id across every tier, preview models included
    pub fn find_model(&self, model_id: &str) -> Option<&AgentModelOption> {
        self.models(true).into_iter().find(|m| m.id == model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, is_auto: bool, is_preview: bool) -> AgentModelOption {
        AgentModelOption {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            is_preview,
            is_auto,
            reasoning_efforts: None,
            default_reasoning_effort: None,
        }
    }

    fn definition() -> AgentModelDefinition {
        AgentModelDefinition {
            agent_id: "test-agent".to_string(),
            name: "Test Agent".to_string(),
            settings_path: ".test/settings.json".to_string(),
            settings_key: "model".to_string(),
            reasoning_key: None,
            preview_key: Some(String::new()),
            auto_models: vec![option("auto", true, false)],
            manual_models: vec![option("a", false, false), option("b", false, false)],
            preview_models: Some(vec![
                option("p-manual-1", false, true),
                option("p-auto", true, true),
                option("p-manual-2", false, true),
            ]),
            default_model: "auto".to_string(),
            default_preview_model: Some("p-auto".to_string()),
        }
    }

    fn ids(models: Vec<&AgentModelOption>) -> Vec<&str> {
        models.into_iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_models_interleave_auto_before_manual() {
        let def = definition();
        assert_eq!(ids(def.models(false)), vec!["auto", "a", "b"]);
        assert_eq!(
            ids(def.models(true)),
            vec!["auto", "p-auto", "a", "b", "p-manual-1", "p-manual-2"]
        );
    }

    #[test]
    fn test_empty_keys_do_not_count_as_support() {
        let def = definition();
        assert!(!def.supports_preview());
        assert!(!def.supports_reasoning());
    }

    #[test]
    fn test_find_model_sees_preview_tier() {
        let def = definition();
        assert!(def.find_model("p-manual-2").is_some());
        assert!(def.find_model("missing").is_none());
    }

    #[test]
    fn test_reasoning_effort_parse() {
        assert_eq!(
            "extra_high".parse::<ReasoningEffort>(),
            Ok(ReasoningEffort::ExtraHigh)
        );
        assert_eq!(ReasoningEffort::Low.to_string(), "low");
        assert!("xhigh".parse::<ReasoningEffort>().is_err());
    }
}
