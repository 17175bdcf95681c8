use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::StockStatus;

pub struct CreateProductParams {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub price: Option<BigDecimal>,
    pub btu: Option<u32>,
    pub energy_rating: Option<String>,
    pub features: Option<Vec<String>>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: Option<StockStatus>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
