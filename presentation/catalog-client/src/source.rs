use async_trait::async_trait;
use thiserror::Error;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client.request: {0}")]
    Request(String),
    #[error("client.not_found")]
    NotFound,
    #[error("client.status: {0}")]
    Status(u16),
    #[error("client.decode: {0}")]
    Decode(String),
}

/// Anything able to hand over the catalog, usually the REST API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, ClientError>;
    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ClientError>;
}
