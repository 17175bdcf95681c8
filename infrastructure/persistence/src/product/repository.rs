use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, error};

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::seed::seed_products;

/// Catalog held in process memory, in insertion order.
///
/// Nothing survives a restart. A poisoned lock surfaces as
/// `RepositoryError::Persistence`.
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Store preloaded with the fixed seed catalog.
    pub fn seeded() -> Result<Self, ProductError> {
        let products = seed_products()?;
        debug!(count = products.len(), "Seeded in-memory catalog");
        Ok(Self::with_products(products))
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    error!("Catalog lock poisoned");
    RepositoryError::Persistence
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().map_err(poisoned)?;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let products = self.products.read().map_err(poisoned)?;
        products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().map_err(poisoned)?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let mut products = self.products.write().map_err(poisoned)?;
        products.retain(|p| &p.id != id);
        Ok(())
    }
}
