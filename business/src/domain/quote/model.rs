use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Well-known storage key holding the quote selection.
pub const SELECTED_PRODUCTS_KEY: &str = "selectedProducts";

/// Snapshot of a product picked for a quote request.
///
/// Only the fields shown on the quote page are kept, so the selection stays
/// readable even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedProduct {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub price: Option<String>,
    pub category: String,
    pub btu: Option<u32>,
    pub energy_rating: Option<String>,
}

impl From<&Product> for SelectedProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            model: product.model.clone(),
            price: product.price.as_ref().map(|p| p.to_string()),
            category: product.category.clone(),
            btu: product.btu,
            energy_rating: product.energy_rating.clone(),
        }
    }
}

/// Result of adding a product to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadySelected,
}
