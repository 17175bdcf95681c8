use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::StockStatus;
use crate::domain::shared::value_objects::ProductId;

/// Partial update. `None` leaves the stored value untouched.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: Option<BigDecimal>,
    pub btu: Option<u32>,
    pub energy_rating: Option<String>,
    pub features: Option<Vec<String>>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: Option<StockStatus>,
}

impl UpdateProductParams {
    /// An update touching no field.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            category: None,
            brand: None,
            model: None,
            price: None,
            btu: None,
            energy_rating: None,
            features: None,
            description: None,
            image_url: None,
            in_stock: None,
        }
    }
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
