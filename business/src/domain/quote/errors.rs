#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("quote.serialization_failed")]
    Serialization,
    #[error("repository.persistence")]
    Storage(#[from] crate::domain::errors::RepositoryError),
}
