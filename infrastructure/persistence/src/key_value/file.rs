use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{error, warn};

use business::domain::errors::RepositoryError;
use business::domain::quote::storage::KeyValueStore;

/// Key-value store persisted as a single JSON object on disk.
///
/// Every write rewrites the whole file. A missing file reads as empty; a file
/// that is not a JSON object of strings is treated as empty and replaced on
/// the next write.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                error!(path = %self.path.display(), "Failed to read key-value file: {}", e);
                return Err(RepositoryError::Persistence);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), "Ignoring malformed key-value file: {}", e);
                Ok(BTreeMap::new())
            }
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write leaves the previous contents intact.
    fn store(&self, entries: &BTreeMap<String, String>) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string_pretty(entries).map_err(|_| RepositoryError::Persistence)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let write_failed = |e: std::io::Error| {
            error!(path = %self.path.display(), "Failed to write key-value file: {}", e);
            RepositoryError::Persistence
        };

        let mut file = NamedTempFile::new_in(dir).map_err(write_failed)?;
        file.write_all(raw.as_bytes()).map_err(write_failed)?;
        file.as_file().sync_all().map_err(write_failed)?;
        file.persist(&self.path).map_err(|e| write_failed(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::Persistence)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::Persistence)?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().map_err(|_| RepositoryError::Persistence)?;
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.store(&entries)?;
        }
        Ok(())
    }
}
