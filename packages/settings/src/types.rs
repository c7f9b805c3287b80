// ABOUTME: Type definitions for agent settings persistence
// ABOUTME: Addressing of an agent's settings file and the values stored in it

use agentdeck_models::{AgentModelDefinition, StoredSelection};
use serde::{Deserialize, Serialize};

/// Values read from or written to an agent's settings file
pub type AgentSettings = StoredSelection;

/// Where an agent keeps its model, preview and reasoning values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsAddress {
    /// Settings file relative to the home directory
    pub settings_path: String,
    /// Dot-notation key of the model value
    pub settings_key: String,
    pub preview_key: Option<String>,
    pub reasoning_key: Option<String>,
}

impl From<&AgentModelDefinition> for SettingsAddress {
    fn from(agent: &AgentModelDefinition) -> Self {
        Self {
            settings_path: agent.settings_path.clone(),
            settings_key: agent.settings_key.clone(),
            preview_key: agent.preview_key.clone(),
            reasoning_key: agent.reasoning_key.clone(),
        }
    }
}
