use crate::domain::errors::RepositoryError;

/// String key-value storage holding the quote selection between sessions.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
