// ABOUTME: Exclusive advisory lock held across a settings file read-modify-write
// ABOUTME: A hidden `.<file>.lock` beside the settings file, locked with fs2

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::SettingsError;

/// Lock guard; the lock is released when the handle is dropped.
///
/// The lock file is left in place. Removing it on drop would let a waiting
/// writer hold a lock on an unlinked file while a newcomer locks a fresh one.
#[derive(Debug)]
pub struct SettingsLock {
    #[allow(dead_code)]
    file: File,
    path: PathBuf,
}

impl SettingsLock {
    /// Block until the lock for `settings_path` is held
    pub fn acquire(settings_path: &Path) -> Result<Self, SettingsError> {
        let path = lock_path(settings_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::io("create settings directory", parent, e))?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| SettingsError::io("open lock file", &path, e))?;

        file.lock_exclusive()
            .map_err(|e| SettingsError::io("lock settings file", &path, e))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<dir>/.<name>.lock` for `<dir>/<name>`
pub fn lock_path(settings_path: &Path) -> PathBuf {
    let parent = settings_path.parent().unwrap_or_else(|| Path::new("."));
    let mut name = std::ffi::OsString::from(".");
    name.push(settings_path.file_name().unwrap_or_default());
    name.push(".lock");
    parent.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[cfg(unix)]
    #[test]
    fn test_lock_path_is_hidden_sibling() {
        assert_eq!(
            lock_path(Path::new("/home/u/.codex/config.toml")),
            PathBuf::from("/home/u/.codex/.config.toml.lock")
        );
    }

    #[test]
    fn test_acquire_creates_directory_and_lock_file() {
        let home = tempfile::tempdir().unwrap();
        let settings = home.path().join(".gemini/settings.json");

        let lock = SettingsLock::acquire(&settings).unwrap();
        assert!(lock.path().exists());
        assert!(!settings.exists());
    }

    #[test]
    fn test_second_holder_waits_for_release() {
        let home = tempfile::tempdir().unwrap();
        let settings = home.path().join("settings.json");

        let first = SettingsLock::acquire(&settings).unwrap();
        let (tx, rx) = mpsc::channel();
        let waiter = {
            let settings = settings.clone();
            thread::spawn(move || {
                let _second = SettingsLock::acquire(&settings).unwrap();
                tx.send(()).unwrap();
            })
        };

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        drop(first);
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        waiter.join().unwrap();
    }
}
