// ABOUTME: Error types for agent settings persistence
// ABOUTME: I/O, parse and serialization failures carry the file path they concern

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not find home directory")]
    HomeDirNotFound,

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Invalid settings key: '{0}'")]
    InvalidKey(String),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON in {}: {source}", .path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML in {}: {source}", .path.display())]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    SerializeJson(#[source] serde_json::Error),

    #[error("Failed to serialize TOML: {0}")]
    SerializeToml(#[from] toml::ser::Error),
}

impl SettingsError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SettingsError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
