// ABOUTME: Applies a requested model, preview or reasoning change to an agent's settings
// ABOUTME: Every transition is checked against the registry before the settings file is written

use anyhow::{bail, Context};

use agentdeck_models::{AgentSelection, ModelRegistry, ReasoningEffort};
use agentdeck_settings::{load_selection, save_selection, SettingsStore};

/// Values passed to `agentdeck settings set`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsChange {
    pub model: Option<String>,
    pub preview: Option<bool>,
    pub reasoning: Option<String>,
}

impl SettingsChange {
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.preview.is_none() && self.reasoning.is_none()
    }
}

/// Load the current selection, apply the change and save it.
/// Nothing is written unless every part of the change is accepted.
pub fn apply_settings_change(
    registry: &ModelRegistry,
    store: &SettingsStore,
    agent_id: &str,
    change: SettingsChange,
) -> anyhow::Result<AgentSelection> {
    if change.is_empty() {
        bail!("Nothing to change. Pass --model, --preview or --reasoning");
    }

    let mut selection = load_selection(registry, store, agent_id)
        .with_context(|| format!("Unknown agent '{}'", agent_id))?;

    if let Some(enabled) = change.preview {
        if !registry.agent_supports_preview(agent_id) {
            bail!("Agent '{}' has no preview mode", agent_id);
        }
        selection = selection.with_preview(registry, enabled)?;
    }

    if let Some(model_id) = &change.model {
        selection = selection.with_model(registry, model_id)?;
    }

    if let Some(raw) = &change.reasoning {
        let effort: ReasoningEffort = raw.parse()?;
        selection = selection.with_reasoning_effort(registry, effort)?;
    }

    save_selection(registry, store, &selection)
        .with_context(|| format!("Failed to save settings for '{}'", agent_id))?;

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdeck_models::REGISTRY;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SettingsStore) {
        let home = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(home.path());
        (home, store)
    }

    fn seed_codex_config(home: &TempDir) -> String {
        let dir = home.path().join(".codex");
        fs::create_dir_all(&dir).unwrap();
        let content = "model = \"gpt-5.2\"\nmodel_reasoning_effort = \"high\"\n".to_string();
        fs::write(dir.join("config.toml"), &content).unwrap();
        content
    }

    fn codex_config(home: &TempDir) -> String {
        fs::read_to_string(home.path().join(".codex/config.toml")).unwrap()
    }

    #[test]
    fn test_apply_change_writes_model_and_effort() {
        let (home, store) = create_test_store();
        let change = SettingsChange {
            model: Some("gpt-5.1-codex-mini".to_string()),
            reasoning: Some("high".to_string()),
            ..SettingsChange::default()
        };

        let selection = apply_settings_change(&REGISTRY, &store, "codex-cli", change).unwrap();
        assert_eq!(selection.model, "gpt-5.1-codex-mini");
        assert_eq!(selection.reasoning_effort, Some(ReasoningEffort::High));

        let table: toml::Table = toml::from_str(&codex_config(&home)).unwrap();
        assert_eq!(table["model"].as_str(), Some("gpt-5.1-codex-mini"));
        assert_eq!(table["model_reasoning_effort"].as_str(), Some("high"));
    }

    #[test]
    fn test_unknown_model_leaves_file_untouched() {
        let (home, store) = create_test_store();
        let before = seed_codex_config(&home);
        let change = SettingsChange {
            model: Some("gpt-0-unknown".to_string()),
            ..SettingsChange::default()
        };

        assert!(apply_settings_change(&REGISTRY, &store, "codex-cli", change).is_err());
        assert_eq!(codex_config(&home), before);
    }

    #[test]
    fn test_unsupported_effort_leaves_file_untouched() {
        let (home, store) = create_test_store();
        let before = seed_codex_config(&home);
        // The mini model only offers medium and high
        let change = SettingsChange {
            model: Some("gpt-5.1-codex-mini".to_string()),
            reasoning: Some("low".to_string()),
            ..SettingsChange::default()
        };

        assert!(apply_settings_change(&REGISTRY, &store, "codex-cli", change).is_err());
        assert_eq!(codex_config(&home), before);
    }

    #[test]
    fn test_invalid_effort_name_leaves_file_untouched() {
        let (home, store) = create_test_store();
        let before = seed_codex_config(&home);
        let change = SettingsChange {
            reasoning: Some("maximum".to_string()),
            ..SettingsChange::default()
        };

        assert!(apply_settings_change(&REGISTRY, &store, "codex-cli", change).is_err());
        assert_eq!(codex_config(&home), before);
    }

    #[test]
    fn test_rejected_change_creates_no_file() {
        let (home, store) = create_test_store();

        let preview_on_codex = SettingsChange {
            preview: Some(true),
            ..SettingsChange::default()
        };
        assert!(apply_settings_change(&REGISTRY, &store, "codex-cli", preview_on_codex).is_err());
        assert!(apply_settings_change(&REGISTRY, &store, "codex-cli", SettingsChange::default()).is_err());
        assert!(apply_settings_change(
            &REGISTRY,
            &store,
            "unknown-agent",
            SettingsChange {
                model: Some("m".to_string()),
                ..SettingsChange::default()
            }
        )
        .is_err());

        assert!(!home.path().join(".codex").exists());
    }
}
