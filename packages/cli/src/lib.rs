// ABOUTME: Library side of the agentdeck CLI
// ABOUTME: Logging setup, table rendering and settings changes shared by the command handlers

pub mod logging;
pub mod render;
pub mod settings;
