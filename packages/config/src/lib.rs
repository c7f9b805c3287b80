// ABOUTME: Configuration and environment variable management for agentdeck
// ABOUTME: Home directory resolution for agent settings files

pub mod constants;
pub mod paths;

pub use paths::{home_dir, settings_file};
