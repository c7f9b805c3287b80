// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across agentdeck

// Home directory resolution
pub const AGENTDECK_HOME: &str = "AGENTDECK_HOME";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// System Environment Variables
pub const HOME: &str = "HOME";
pub const USERPROFILE: &str = "USERPROFILE"; // Windows
