use bigdecimal::BigDecimal;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::StockStatus;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum StockStatusDto {
    #[oai(rename = "in_stock")]
    InStock,
    #[oai(rename = "low_stock")]
    LowStock,
    #[oai(rename = "out_of_stock")]
    OutOfStock,
}

impl From<StockStatus> for StockStatusDto {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::InStock => StockStatusDto::InStock,
            StockStatus::LowStock => StockStatusDto::LowStock,
            StockStatus::OutOfStock => StockStatusDto::OutOfStock,
        }
    }
}

/// Catalog entry as served to clients.
///
/// Absent optional fields are emitted as `null`; `price` is a decimal string.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Opaque product identifier
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    /// Price as a decimal string, e.g. "3299.99"
    pub price: Option<String>,
    /// Capacity in BTU
    pub btu: Option<u32>,
    /// Efficiency label, e.g. "16 SEER"
    pub energy_rating: Option<String>,
    pub features: Option<Vec<String>>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: StockStatusDto,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            category: product.category,
            brand: product.brand,
            model: product.model,
            price: product.price.map(|p| p.to_string()),
            btu: product.btu,
            energy_rating: product.energy_rating,
            features: product.features,
            description: product.description,
            image_url: product.image_url,
            in_stock: product.in_stock.into(),
        }
    }
}

// Write bodies are parsed only after the write policy lets the request
// through, so they are plain serde types rather than OpenAPI payloads.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
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

impl From<CreateProductRequest> for CreateProductParams {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            name: body.name,
            category: body.category,
            brand: body.brand,
            model: body.model,
            price: body.price,
            btu: body.btu,
            energy_rating: body.energy_rating,
            features: body.features,
            description: body.description,
            image_url: body.image_url,
            in_stock: body.in_stock,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
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

impl UpdateProductRequest {
    pub fn into_params(self, id: ProductId) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: self.name,
            category: self.category,
            brand: self.brand,
            model: self.model,
            price: self.price,
            btu: self.btu,
            energy_rating: self.energy_rating,
            features: self.features,
            description: self.description,
            image_url: self.image_url,
            in_stock: self.in_stock,
        }
    }
}
