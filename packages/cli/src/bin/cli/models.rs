// ABOUTME: CLI handlers for listing agents and models and validating the registry
// ABOUTME: Read-only views over the embedded agent model registry

use anyhow::{bail, Context};
use colored::*;

use agentdeck_cli::render::{agents_table, models_table};
use agentdeck_models::{ModelRegistry, RegistryError, AGENTS_JSON};

/// Load and validate the embedded registry
pub fn load_registry() -> anyhow::Result<ModelRegistry> {
    ModelRegistry::new().context("Agent model registry failed to load")
}

pub fn list_agents(registry: &ModelRegistry) -> anyhow::Result<()> {
    let agents = registry.list_agents();

    println!("{}", "Agents".blue().bold());
    println!();
    println!("{}", agents_table(&agents));
    println!("Total: {} agents", agents.len().to_string().cyan());

    Ok(())
}

pub fn list_models(registry: &ModelRegistry, agent_id: &str, preview: bool) -> anyhow::Result<()> {
    let Some(agent) = registry.get_agent(agent_id) else {
        bail!(
            "Unknown agent '{}'. Use 'agentdeck agents' to list known agents",
            agent_id
        );
    };

    if preview && !agent.supports_preview() {
        println!(
            "{}",
            format!("{} has no preview models; showing the regular list", agent.name).yellow()
        );
    }

    println!("{}", format!("Models - {}", agent.name).blue().bold());
    println!();
    println!("{}", models_table(registry, agent_id, preview));
    println!("{}", "* default model".dimmed());

    Ok(())
}

/// Parse the embedded document without failing fast and report every issue
pub fn validate() -> anyhow::Result<()> {
    let registry = ModelRegistry::from_json(AGENTS_JSON)
        .context("Agent model registry document could not be parsed")?;

    match registry.validate() {
        Ok(()) => {
            println!(
                "{} {} agents, all defaults resolve (registry version {})",
                "OK".green().bold(),
                registry.list_agents().len(),
                registry.version().unwrap_or("unknown")
            );
            Ok(())
        }
        Err(RegistryError::Inconsistent(issues)) => {
            for issue in &issues {
                eprintln!("  {} {}", "✗".red(), issue);
            }
            bail!("{} registry issue(s) found", issues.len())
        }
        Err(e) => Err(e.into()),
    }
}
