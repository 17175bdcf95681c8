use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated = Product::from_repository(
            existing.id,
            params.name.unwrap_or(existing.name),
            params.category.unwrap_or(existing.category),
            params.brand.unwrap_or(existing.brand),
            params.model.unwrap_or(existing.model),
            params.price.or(existing.price),
            params.btu.or(existing.btu),
            params.energy_rating.or(existing.energy_rating),
            params.features.or(existing.features),
            params.description.or(existing.description),
            params.image_url.or(existing.image_url),
            params.in_stock.unwrap_or(existing.in_stock),
        );
        updated.validate()?;

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
