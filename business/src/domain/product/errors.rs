use super::write_policy::WriteOperation;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.brand_empty")]
    BrandEmpty,
    #[error("product.model_empty")]
    ModelEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("{}", .0.disabled_message())]
    WriteDisabled(WriteOperation),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
