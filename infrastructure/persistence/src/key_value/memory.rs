use std::collections::HashMap;
use std::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::quote::storage::KeyValueStore;

/// Process-local key-value map.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::Persistence)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::Persistence)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::Persistence)?;
        entries.remove(key);
        Ok(())
    }
}
