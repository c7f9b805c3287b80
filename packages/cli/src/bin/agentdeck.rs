use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;

mod cli;

use cli::settings::SettingsCommands;

#[derive(Parser)]
#[command(name = "agentdeck")]
#[command(about = "agentdeck CLI - agent model registry and settings")]
#[command(version)]
struct Cli {
    /// Directory agent settings paths are resolved against (defaults to AGENTDECK_HOME or HOME)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Log registry and settings activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known agents and where they keep their settings
    Agents,
    /// List the models an agent offers
    Models {
        /// Agent ID (e.g. gemini-cli)
        agent: String,
        /// Include preview models
        #[arg(long)]
        preview: bool,
    },
    /// Show or change an agent's model settings
    #[command(subcommand)]
    Settings(SettingsCommands),
    /// Check the registry for defaults and models that do not resolve
    Validate,
}

fn main() {
    let args = Cli::parse();
    agentdeck_cli::logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    match args.command {
        Commands::Agents => cli::models::list_agents(&cli::models::load_registry()?),
        Commands::Models { agent, preview } => {
            cli::models::list_models(&cli::models::load_registry()?, &agent, preview)
        }
        Commands::Settings(command) => {
            let registry = cli::models::load_registry()?;
            let store = cli::settings::open_store(args.home)?;
            cli::settings::handle_settings_command(&registry, &store, command)
        }
        Commands::Validate => cli::models::validate(),
    }
}
