// ABOUTME: CLI handlers for showing and changing an agent's model settings
// ABOUTME: Reads and writes the agent's own settings file through the settings store

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Subcommand;
use colored::*;

use agentdeck_cli::render::selection_table;
use agentdeck_cli::settings::{apply_settings_change, SettingsChange};
use agentdeck_models::{AgentSelection, ModelRegistry};
use agentdeck_settings::{AgentSettings, SettingsAddress, SettingsStore};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show stored and effective settings for an agent
    Show {
        /// Agent ID (e.g. codex-cli)
        agent: String,
    },
    /// Change an agent's model, preview mode or reasoning effort
    Set {
        /// Agent ID (e.g. codex-cli)
        agent: String,
        /// Model ID to select
        #[arg(short, long)]
        model: Option<String>,
        /// Enable or disable preview models (true/false)
        #[arg(long)]
        preview: Option<bool>,
        /// Reasoning effort (low, medium, high, extra_high)
        #[arg(short, long)]
        reasoning: Option<String>,
    },
}

pub fn open_store(home: Option<PathBuf>) -> anyhow::Result<SettingsStore> {
    match home {
        Some(home) => Ok(SettingsStore::new(home)),
        None => SettingsStore::from_env().context("Cannot locate agent settings files"),
    }
}

pub fn handle_settings_command(
    registry: &ModelRegistry,
    store: &SettingsStore,
    command: SettingsCommands,
) -> anyhow::Result<()> {
    match command {
        SettingsCommands::Show { agent } => show_settings(registry, store, &agent),
        SettingsCommands::Set {
            agent,
            model,
            preview,
            reasoning,
        } => set_settings(
            registry,
            store,
            &agent,
            SettingsChange {
                model,
                preview,
                reasoning,
            },
        ),
    }
}

fn show_settings(registry: &ModelRegistry, store: &SettingsStore, agent_id: &str) -> anyhow::Result<()> {
    let Some(agent) = registry.get_agent(agent_id) else {
        bail!("Unknown agent '{}'", agent_id);
    };
    let address = SettingsAddress::from(agent);

    let stored = match store.read(agent_id, &address) {
        Ok(stored) => stored,
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            AgentSettings::default()
        }
    };
    let resolved = AgentSelection::resolve(registry, agent_id, &stored)
        .with_context(|| format!("Unknown agent '{}'", agent_id))?;

    println!("{}", format!("Settings - {}", agent.name).blue().bold());
    println!("{}", store.path_for(&address).display().to_string().dimmed());
    println!();
    println!("{}", selection_table(&stored, &resolved));

    Ok(())
}

fn set_settings(
    registry: &ModelRegistry,
    store: &SettingsStore,
    agent_id: &str,
    change: SettingsChange,
) -> anyhow::Result<()> {
    let selection = apply_settings_change(registry, store, agent_id, change)?;

    if !registry.is_model_available(agent_id, &selection.model, selection.preview_enabled) {
        println!(
            "{}",
            format!(
                "'{}' is a preview model; enable preview to see it in selectors",
                selection.model
            )
            .yellow()
        );
    }

    println!("{} Updated settings for {}", "✓".green(), agent_id.cyan());
    println!("  model: {}", selection.model);
    if registry.agent_supports_preview(agent_id) {
        println!("  preview: {}", selection.preview_enabled);
    }
    if let Some(effort) = selection.reasoning_effort {
        println!("  reasoning effort: {}", effort);
    }

    Ok(())
}
