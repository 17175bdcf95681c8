use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::StockStatus;
use business::domain::shared::value_objects::ProductId;

use crate::source::ClientError;

/// Product as returned by `GET /api/products`.
///
/// Prices arrive as decimal strings; numbers are accepted as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub id: String,
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

impl TryFrom<ProductPayload> for Product {
    type Error = ClientError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        let id = payload.id.clone();
        Product::with_id(
            ProductId::new(payload.id),
            NewProductProps {
                name: payload.name,
                category: payload.category,
                brand: payload.brand,
                model: payload.model,
                price: payload.price,
                btu: payload.btu,
                energy_rating: payload.energy_rating,
                features: payload.features,
                description: payload.description,
                image_url: payload.image_url,
                in_stock: payload.in_stock,
            },
        )
        .map_err(|e| ClientError::Decode(format!("product {}: {}", id, e)))
    }
}
