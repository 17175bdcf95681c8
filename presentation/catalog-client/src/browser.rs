use tracing::warn;

use business::domain::product::facets::CatalogFacets;
use business::domain::product::filter::FilterSpec;
use business::domain::product::model::Product;
use business::domain::product::query::apply_filters;

use crate::source::CatalogSource;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<Product>),
    Failed(String),
}

/// Client-side catalog view: fetches once, then filters and sorts locally.
pub struct CatalogBrowser {
    state: LoadState,
    filters: FilterSpec,
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBrowser {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            filters: FilterSpec::default(),
        }
    }

    pub fn with_filters(filters: FilterSpec) -> Self {
        Self {
            state: LoadState::Loading,
            filters,
        }
    }

    /// Fetches the whole catalog. A failure is kept as state, never retried.
    pub async fn load(&mut self, source: &dyn CatalogSource) {
        self.state = match source.fetch_products().await {
            Ok(products) => LoadState::Ready(products),
            Err(e) => {
                warn!("Failed to load catalog: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterSpec {
        &mut self.filters
    }

    /// Products matching the current filters; empty until the catalog is loaded.
    pub fn results(&self) -> Vec<&Product> {
        match &self.state {
            LoadState::Ready(products) => apply_filters(products, &self.filters),
            LoadState::Loading | LoadState::Failed(_) => Vec::new(),
        }
    }

    pub fn facets(&self) -> Option<CatalogFacets> {
        match &self.state {
            LoadState::Ready(products) => Some(CatalogFacets::from_products(products)),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }
}
