use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::ProductError;
use super::value_objects::StockStatus;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
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
    pub in_stock: StockStatus,
}

#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
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

impl Product {
    /// Validates the props and assigns a fresh id.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::with_id(ProductId::generate(), props)
    }

    /// Validates the props under a caller-chosen id (seed data).
    pub fn with_id(id: ProductId, props: NewProductProps) -> Result<Self, ProductError> {
        let product = Self {
            id,
            name: props.name,
            category: props.category,
            brand: props.brand,
            model: props.model,
            price: props.price,
            btu: props.btu,
            energy_rating: props.energy_rating,
            features: props.features,
            description: props.description,
            image_url: props.image_url,
            in_stock: props.in_stock.unwrap_or_default(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        category: String,
        brand: String,
        model: String,
        price: Option<BigDecimal>,
        btu: Option<u32>,
        energy_rating: Option<String>,
        features: Option<Vec<String>>,
        description: Option<String>,
        image_url: Option<String>,
        in_stock: StockStatus,
    ) -> Self {
        Self {
            id,
            name,
            category,
            brand,
            model,
            price,
            btu,
            energy_rating,
            features,
            description,
            image_url,
            in_stock,
        }
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if self.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }
        if self.brand.trim().is_empty() {
            return Err(ProductError::BrandEmpty);
        }
        if self.model.trim().is_empty() {
            return Err(ProductError::ModelEmpty);
        }
        if let Some(price) = &self.price
            && *price < BigDecimal::zero()
        {
            return Err(ProductError::NegativePrice);
        }
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.in_stock == StockStatus::InStock
    }
}
