// ABOUTME: Table and label rendering for agents, models and selections
// ABOUTME: Pure formatting over registry data so command handlers only print

use agentdeck_models::{
    AgentModelDefinition, AgentModelOption, AgentSelection, ModelRegistry, ReasoningEffort,
    ReasoningEffortOption, StoredSelection,
};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

const NONE: &str = "—";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn agents_table(agents: &[&AgentModelDefinition]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Settings File", "Model Key", "Preview", "Reasoning"]);

    for agent in agents {
        table.add_row(vec![
            agent.agent_id.clone(),
            agent.name.clone(),
            agent.settings_path.clone(),
            agent.settings_key.clone(),
            optional(agent.preview_key.as_deref()),
            optional(agent.reasoning_key.as_deref()),
        ]);
    }

    table
}

pub fn models_table(registry: &ModelRegistry, agent_id: &str, preview_enabled: bool) -> Table {
    let default_model = registry.get_default_model(agent_id, preview_enabled);

    let mut table = new_table();
    table.set_header(vec!["", "ID", "Name", "Kind", "Reasoning", "Description"]);

    for model in registry.get_agent_models(agent_id, preview_enabled) {
        let marker = if Some(model.id.as_str()) == default_model { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            model.id.clone(),
            model.name.clone(),
            model_kind(model),
            efforts_label(
                model.reasoning_efforts.as_deref(),
                registry.get_default_reasoning_effort(agent_id, &model.id),
            ),
            optional(model.description.as_deref()),
        ]);
    }

    table
}

pub fn selection_table(stored: &StoredSelection, resolved: &AgentSelection) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Setting", "Stored", "Effective"]);
    table.add_row(vec![
        "model".to_string(),
        optional(stored.model.as_deref()),
        resolved.model.clone(),
    ]);
    table.add_row(vec![
        "preview".to_string(),
        optional(stored.preview_enabled.map(bool_label)),
        bool_label(resolved.preview_enabled).to_string(),
    ]);
    table.add_row(vec![
        "reasoning effort".to_string(),
        optional(stored.reasoning_effort.as_deref()),
        optional(resolved.reasoning_effort.map(|e| e.as_str())),
    ]);
    table
}

/// `auto`, `manual`, optionally suffixed with `preview`
pub fn model_kind(model: &AgentModelOption) -> String {
    let kind = if model.is_auto { "auto" } else { "manual" };
    if model.is_preview {
        format!("{}, preview", kind)
    } else {
        kind.to_string()
    }
}

/// Comma-separated efforts with the default marked by `*`
pub fn efforts_label(efforts: Option<&[ReasoningEffortOption]>, default: ReasoningEffort) -> String {
    match efforts {
        Some(efforts) if !efforts.is_empty() => efforts
            .iter()
            .map(|e| {
                if e.id == default {
                    format!("{}*", e.id)
                } else {
                    e.id.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => NONE.to_string(),
    }
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or(NONE).to_string()
}
