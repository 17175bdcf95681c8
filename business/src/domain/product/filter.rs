use std::collections::BTreeSet;

use bigdecimal::BigDecimal;

use super::value_objects::SortKey;

/// Inclusive numeric bounds. A missing bound does not restrict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusiveRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for InclusiveRange<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd> InclusiveRange<T> {
    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.min.as_ref().is_none_or(|min| value >= min)
            && self.max.as_ref().is_none_or(|max| value <= max)
    }

    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// The combined state of every filter and sort control on the catalog page.
///
/// Recomputed on each interaction and handed to
/// [`apply_filters`](super::query::apply_filters).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Search box above the product grid.
    pub page_search: String,
    /// Search field inside the filter panel.
    pub search: String,
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub energy_ratings: BTreeSet<String>,
    pub price_range: InclusiveRange<BigDecimal>,
    pub btu_range: InclusiveRange<u32>,
    pub in_stock_only: bool,
    pub sort: SortKey,
}

impl FilterSpec {
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.brands, brand);
    }

    pub fn toggle_energy_rating(&mut self, rating: &str) {
        toggle(&mut self.energy_ratings, rating);
    }

    /// Number of filter-panel controls currently narrowing the result, as shown
    /// on the filter badge. The page-level search box is not part of the panel.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            !self.categories.is_empty(),
            !self.brands.is_empty(),
            !self.energy_ratings.is_empty(),
            self.in_stock_only,
            self.price_range.is_bounded(),
            self.btu_range.is_bounded(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Resets every filter and both search fields. The sort order is kept.
    pub fn clear(&mut self) {
        *self = Self {
            sort: self.sort,
            ..Self::default()
        };
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}
