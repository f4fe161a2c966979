//! Client-local key-value storage.
//!
//! A single JSON object file mapping string keys to string values. Every
//! call re-reads the file, so separate processes see each other's writes.
//! Writes go to a `.tmp` sibling first and are renamed into place.

use std::path::{Path, PathBuf};

use gemchat_common::{PlatformError, StorageError};
use serde_json::{Map, Value};

use crate::paths::storage_file;

pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the platform default location (`data_dir()/storage.json`).
    pub fn open_default() -> Result<Self, PlatformError> {
        Ok(Self::new(storage_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value for `key`, or `None` if unset or not a string.
    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
    }

    /// A corrupt file is replaced rather than left blocking every write.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }

    /// Removing an absent key succeeds without touching the file.
    pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }

    fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(StorageError::Unavailable(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Corrupt(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StorageError::Corrupt(format!(
                "failed to parse {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn read_map_for_write(&self) -> Result<Map<String, Value>, StorageError> {
        match self.read_map() {
            Err(StorageError::Corrupt(msg)) => {
                tracing::warn!("discarding corrupt storage: {msg}");
                Ok(Map::new())
            }
            other => other,
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Unavailable(format!("failed to serialize storage: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Unavailable(format!(
                    "failed to create storage directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        write_private(&tmp_path, json.as_bytes()).map_err(|e| {
            StorageError::Unavailable(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
            let _ = std::fs::remove_file(&tmp_path);
            write_private(&self.path, json.as_bytes()).map_err(|e2| {
                StorageError::Unavailable(format!(
                    "failed to write {}: {e2}",
                    self.path.display()
                ))
            })?;
        }

        tracing::debug!(path = %self.path.display(), "storage saved to disk");
        Ok(())
    }
}

/// Write `bytes` to `path`, readable by the owner only on Unix.
///
/// A new file is created with mode 0600 so the key is never on disk with
/// wider permissions. An existing file is narrowed to 0600 as well.
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(bytes)?;
        file.sync_all()
    }
    #[cfg(not(unix))]
    {
        std::fs::write(path, bytes)
    }
}
