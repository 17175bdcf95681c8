use std::collections::BTreeSet;

use super::model::Product;

/// Distinct values available to the filter panel for a given catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFacets {
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub energy_ratings: BTreeSet<String>,
}

impl CatalogFacets {
    pub fn from_products(products: &[Product]) -> Self {
        let mut facets = Self::default();
        for product in products {
            facets.categories.insert(product.category.clone());
            facets.brands.insert(product.brand.clone());
            if let Some(rating) = &product.energy_rating {
                facets.energy_ratings.insert(rating.clone());
            }
        }
        facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;

    fn product(category: &str, brand: &str, rating: Option<&str>) -> Product {
        Product::new(NewProductProps {
            name: format!("{brand} unit"),
            category: category.to_string(),
            brand: brand.to_string(),
            model: "X1".to_string(),
            energy_rating: rating.map(str::to_string),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn should_collect_distinct_sorted_values() {
        let products = vec![
            product("Heat Pumps", "Trane", Some("20 SEER")),
            product("Air Conditioning", "Carrier", Some("16 SEER")),
            product("Heat Pumps", "Rheem", Some("14 SEER")),
            product("Air Conditioning", "Carrier", None),
        ];

        let facets = CatalogFacets::from_products(&products);

        assert_eq!(
            facets.categories.into_iter().collect::<Vec<_>>(),
            vec!["Air Conditioning", "Heat Pumps"]
        );
        assert_eq!(
            facets.brands.into_iter().collect::<Vec<_>>(),
            vec!["Carrier", "Rheem", "Trane"]
        );
        assert_eq!(facets.energy_ratings.len(), 3);
    }

    #[test]
    fn should_be_empty_for_empty_catalog() {
        assert_eq!(CatalogFacets::from_products(&[]), CatalogFacets::default());
    }
}
