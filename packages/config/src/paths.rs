// ABOUTME: Home directory and settings file path resolution
// ABOUTME: AGENTDECK_HOME override, then HOME/USERPROFILE, then the platform home directory

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{AGENTDECK_HOME, HOME, USERPROFILE};

/// Get the directory agent settings paths are resolved against
pub fn home_dir() -> Option<PathBuf> {
    for var in [AGENTDECK_HOME, HOME, USERPROFILE] {
        if let Some(dir) = env::var_os(var).filter(|v| !v.is_empty()) {
            debug!("Resolved home directory from {}", var);
            return Some(PathBuf::from(dir));
        }
    }

    // Fall back to dirs crate for normal usage
    dirs::home_dir()
}

/// Join a settings path relative to `home`. A leading `~/` is accepted and ignored.
pub fn settings_file(home: &Path, relative: &str) -> PathBuf {
    let relative = relative
        .strip_prefix("~/")
        .unwrap_or(relative)
        .trim_start_matches('/');
    home.join(relative)
}
