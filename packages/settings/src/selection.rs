// ABOUTME: Loads and saves an agent's resolved model selection through the settings store
// ABOUTME: Read failures fall back to registry defaults; they are logged, never fatal

use agentdeck_models::{AgentSelection, ModelRegistry};
use tracing::warn;

use crate::error::SettingsError;
use crate::store::SettingsStore;
use crate::types::{AgentSettings, SettingsAddress};

/// Current selection for an agent, `None` if the registry does not know it
pub fn load_selection(
    registry: &ModelRegistry,
    store: &SettingsStore,
    agent_id: &str,
) -> Option<AgentSelection> {
    let agent = registry.get_agent(agent_id)?;
    let address = SettingsAddress::from(agent);

    let stored = store.read(agent_id, &address).unwrap_or_else(|e| {
        warn!("Failed to read settings for {}, using defaults: {}", agent_id, e);
        AgentSettings::default()
    });

    AgentSelection::resolve(registry, agent_id, &stored)
}

/// Persist a selection into the agent's own settings file
pub fn save_selection(
    registry: &ModelRegistry,
    store: &SettingsStore,
    selection: &AgentSelection,
) -> Result<(), SettingsError> {
    let agent = registry
        .get_agent(&selection.agent_id)
        .ok_or_else(|| SettingsError::UnknownAgent(selection.agent_id.clone()))?;

    store.write(
        &selection.agent_id,
        &SettingsAddress::from(agent),
        &selection.to_stored(registry),
    )
}
