// ABOUTME: Reads and writes model, preview and reasoning values in agents' own settings files
// ABOUTME: Files live under the home directory; writes preserve unrelated keys and are atomic

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::SettingsError;
use crate::format::SettingsFormat;
use crate::lock::SettingsLock;
use crate::nested::{get_nested, set_nested};
use crate::types::{AgentSettings, SettingsAddress};

#[derive(Debug, Clone)]
pub struct SettingsStore {
    home: PathBuf,
}

impl SettingsStore {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Store rooted at the resolved home directory (see `agentdeck_config::home_dir`)
    pub fn from_env() -> Result<Self, SettingsError> {
        agentdeck_config::home_dir()
            .map(Self::new)
            .ok_or(SettingsError::HomeDirNotFound)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Absolute path of an agent's settings file
    pub fn path_for(&self, address: &SettingsAddress) -> PathBuf {
        agentdeck_config::settings_file(&self.home, &address.settings_path)
    }

    /// Read an agent's settings. A missing file means nothing is configured yet.
    pub fn read(
        &self,
        agent_id: &str,
        address: &SettingsAddress,
    ) -> Result<AgentSettings, SettingsError> {
        let path = self.path_for(address);
        let format = SettingsFormat::from_path(&path);

        let Some(content) = read_optional(&path)? else {
            return Ok(AgentSettings::default());
        };
        let document = format.parse(&path, &content)?;

        let model = get_nested(&document, &address.settings_key)
            .and_then(Value::as_str)
            .map(String::from);

        let preview_enabled = address
            .preview_key
            .as_deref()
            .and_then(|key| get_nested(&document, key))
            .and_then(Value::as_bool);

        let reasoning_effort = address
            .reasoning_key
            .as_deref()
            .and_then(|key| get_nested(&document, key))
            .and_then(Value::as_str)
            .map(String::from);

        info!(
            "Read agent settings for {}: model={:?}, preview={:?}, reasoning={:?}",
            agent_id, model, preview_enabled, reasoning_effort
        );

        Ok(AgentSettings {
            model,
            preview_enabled,
            reasoning_effort,
        })
    }

    /// Update an agent's settings file, keeping every key it does not own.
    ///
    /// Preview and reasoning values are written only when the address has a key
    /// for them and the value is present. The read-modify-write runs under an
    /// exclusive lock, and a symlinked settings file is updated at its target.
    pub fn write(
        &self,
        agent_id: &str,
        address: &SettingsAddress,
        settings: &AgentSettings,
    ) -> Result<(), SettingsError> {
        let registry_path = self.path_for(address);
        let format = SettingsFormat::from_path(&registry_path);
        let path = resolve_target(&registry_path)?;

        let _lock = SettingsLock::acquire(&path)?;

        let mut document = match read_optional(&path)? {
            Some(content) => format.parse(&path, &content).unwrap_or_else(|e| {
                warn!("Replacing unreadable settings file for {}: {}", agent_id, e);
                Value::Object(Map::new())
            }),
            None => Value::Object(Map::new()),
        };

        if let Some(model) = &settings.model {
            set_nested(&mut document, &address.settings_key, Value::String(model.clone()))?;
        }

        if let (Some(key), Some(preview)) = (&address.preview_key, settings.preview_enabled) {
            set_nested(&mut document, key, Value::Bool(preview))?;
        }

        if let (Some(key), Some(reasoning)) = (&address.reasoning_key, &settings.reasoning_effort) {
            set_nested(&mut document, key, Value::String(reasoning.clone()))?;
        }

        let content = format.serialize(document)?;
        write_atomic(&path, &content)?;

        info!("Updated agent settings for {} in {}", agent_id, path.display());

        Ok(())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, SettingsError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SettingsError::io("read settings file", path, e)),
    }
}

/// The file a write should replace: symlinks are followed so the link survives
fn resolve_target(path: &Path) -> Result<PathBuf, SettingsError> {
    match fs::canonicalize(path) {
        Ok(real) => {
            if real != path {
                debug!("Settings file {} resolves to {}", path.display(), real.display());
            }
            Ok(real)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => match fs::read_link(path) {
            // Dangling link: create the file it points at
            Ok(target) => Ok(path.parent().unwrap_or_else(|| Path::new(".")).join(target)),
            Err(_) => Ok(path.to_path_buf()),
        },
        Err(e) => Err(SettingsError::io("resolve settings file", path, e)),
    }
}

/// Write via a uniquely named temporary file in the same directory and rename
/// it into place. An existing file's permissions carry over to the replacement.
fn write_atomic(path: &Path, content: &str) -> Result<(), SettingsError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)
        .map_err(|e| SettingsError::io("create settings directory", parent, e))?;

    let permissions = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(SettingsError::io("inspect settings file", path, e)),
    };

    let mut tmp_file = NamedTempFile::new_in(parent)
        .map_err(|e| SettingsError::io("create temporary file", parent, e))?;
    tmp_file
        .write_all(content.as_bytes())
        .and_then(|_| match &permissions {
            Some(permissions) => tmp_file.as_file().set_permissions(permissions.clone()),
            None => Ok(()),
        })
        .and_then(|_| tmp_file.as_file().sync_all())
        .map_err(|e| SettingsError::io("write settings file", tmp_file.path(), e))?;

    tmp_file
        .persist(path)
        .map(|_| ())
        .map_err(|e| SettingsError::io("replace settings file", path, e.error))
}
