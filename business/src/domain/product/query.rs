use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::filter::FilterSpec;
use super::model::Product;
use super::value_objects::SortKey;

/// Produces the ordered view of `products` selected by `spec`.
///
/// Pure and deterministic: the same inputs always give the same output.
/// Filters run in a fixed order and the final sort is stable, so ties keep
/// the order of the input sequence.
///
/// Rules:
/// - Both search fields must match (each against name, brand or model, case-insensitive)
/// - Empty category, brand and energy-rating sets do not restrict
/// - Products without a price or BTU rating always pass the matching range
/// - Products without an energy rating fail a non-empty rating filter
/// - Unpriced products sort as 0, products without a BTU rating sort as 0
pub fn apply_filters<'a>(products: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let page_search = spec.page_search.to_lowercase();
    let panel_search = spec.search.to_lowercase();

    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| matches_search(p, &page_search))
        .filter(|p| matches_search(p, &panel_search))
        .filter(|p| spec.categories.is_empty() || spec.categories.contains(&p.category))
        .filter(|p| spec.brands.is_empty() || spec.brands.contains(&p.brand))
        .filter(|p| p.price.as_ref().is_none_or(|price| spec.price_range.contains(price)))
        .filter(|p| p.btu.is_none_or(|btu| spec.btu_range.contains(&btu)))
        .filter(|p| {
            spec.energy_ratings.is_empty()
                || p.energy_rating
                    .as_ref()
                    .is_some_and(|rating| spec.energy_ratings.contains(rating))
        })
        .filter(|p| !spec.in_stock_only || p.is_available())
        .collect();

    visible.sort_by(|a, b| compare(a, b, spec.sort));
    visible
}

/// `needle` must already be lowercase. An empty needle matches everything.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.brand.to_lowercase().contains(needle)
        || product.model.to_lowercase().contains(needle)
}

fn compare(a: &Product, b: &Product, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::PriceLow => price_or_zero(a).cmp(&price_or_zero(b)),
        SortKey::PriceHigh => price_or_zero(b).cmp(&price_or_zero(a)),
        SortKey::Btu => b.btu.unwrap_or(0).cmp(&a.btu.unwrap_or(0)),
        SortKey::Brand => a.brand.cmp(&b.brand),
    }
}

fn price_or_zero(product: &Product) -> BigDecimal {
    product.price.clone().unwrap_or_else(BigDecimal::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::filter::InclusiveRange;
    use crate::domain::product::value_objects::StockStatus;
    use crate::domain::shared::value_objects::ProductId;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[allow(clippy::too_many_arguments)]
    fn product(
        id: &str,
        name: &str,
        category: &str,
        brand: &str,
        model: &str,
        price: Option<&str>,
        btu: Option<u32>,
        energy_rating: Option<&str>,
        in_stock: StockStatus,
    ) -> Product {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            category.to_string(),
            brand.to_string(),
            model.to_string(),
            price.map(|p| BigDecimal::from_str(p).unwrap()),
            btu,
            energy_rating.map(str::to_string),
            None,
            None,
            None,
            in_stock,
        )
    }

    fn six_products() -> Vec<Product> {
        vec![
            product(
                "1",
                "Carrier 24ACC636A003 Performance Series Central Air Conditioner",
                "Air Conditioning",
                "Carrier",
                "24ACC636A003",
                Some("3299.99"),
                Some(36000),
                Some("16 SEER"),
                StockStatus::InStock,
            ),
            product(
                "2",
                "Trane XV20i TruComfort Variable Speed Heat Pump",
                "Heat Pumps",
                "Trane",
                "XV20i",
                Some("4599.99"),
                Some(48000),
                Some("20 SEER"),
                StockStatus::InStock,
            ),
            product(
                "3",
                "Lennox EL296V High-Efficiency Gas Furnace",
                "Heating",
                "Lennox",
                "EL296V",
                Some("2899.99"),
                Some(80000),
                Some("96% AFUE"),
                StockStatus::LowStock,
            ),
            product(
                "4",
                "Goodman GSX14 Central Air Conditioner",
                "Air Conditioning",
                "Goodman",
                "GSX14",
                Some("2299.99"),
                Some(24000),
                Some("14 SEER"),
                StockStatus::InStock,
            ),
            product(
                "5",
                "Rheem Classic Plus Series Single Stage Heat Pump",
                "Heat Pumps",
                "Rheem",
                "RP1424AJ1NA",
                Some("2799.99"),
                Some(24000),
                Some("14 SEER"),
                StockStatus::InStock,
            ),
            product(
                "6",
                "York YXV 20 SEER Variable Capacity Air Conditioner",
                "Air Conditioning",
                "York",
                "YXV",
                Some("3899.99"),
                Some(36000),
                Some("20 SEER"),
                StockStatus::OutOfStock,
            ),
        ]
    }

    fn ids(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.id.to_string()).collect()
    }

    fn names(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn should_return_in_stock_heat_pumps_sorted_by_name() {
        let products = six_products();
        let mut spec = FilterSpec {
            in_stock_only: true,
            ..Default::default()
        };
        spec.toggle_category("Heat Pumps");

        let result = apply_filters(&products, &spec);

        assert_eq!(
            names(&result),
            vec![
                "Rheem Classic Plus Series Single Stage Heat Pump",
                "Trane XV20i TruComfort Variable Speed Heat Pump",
            ]
        );
    }

    #[test]
    fn should_return_everything_sorted_by_name_when_spec_default() {
        let products = six_products();

        let result = apply_filters(&products, &FilterSpec::default());

        assert_eq!(ids(&result), vec!["1", "4", "3", "5", "2", "6"]);
    }

    #[test]
    fn should_search_name_brand_and_model_case_insensitively() {
        let products = six_products();

        let by_model = apply_filters(
            &products,
            &FilterSpec {
                page_search: "el296".to_string(),
                ..Default::default()
            },
        );
        let by_brand = apply_filters(
            &products,
            &FilterSpec {
                search: "GOODMAN".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(ids(&by_model), vec!["3"]);
        assert_eq!(ids(&by_brand), vec!["4"]);
    }

    #[test]
    fn should_require_both_search_fields_to_match() {
        let products = six_products();
        let spec = FilterSpec {
            page_search: "heat pump".to_string(),
            search: "trane".to_string(),
            ..Default::default()
        };

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn should_return_nothing_when_search_fields_disagree() {
        let products = six_products();
        let spec = FilterSpec {
            page_search: "carrier".to_string(),
            search: "york".to_string(),
            ..Default::default()
        };

        assert!(apply_filters(&products, &spec).is_empty());
    }

    #[test]
    fn should_filter_by_brand_set() {
        let products = six_products();
        let mut spec = FilterSpec::default();
        spec.toggle_brand("York");
        spec.toggle_brand("Carrier");

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result), vec!["1", "6"]);
    }

    #[test]
    fn should_filter_by_inclusive_price_range() {
        let products = six_products();
        let spec = FilterSpec {
            price_range: InclusiveRange::between(
                BigDecimal::from(2299i64),
                BigDecimal::from_str("2899.99").unwrap(),
            ),
            sort: SortKey::PriceLow,
            ..Default::default()
        };

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result), vec!["4", "5", "3"]);
    }

    #[test]
    fn should_keep_unpriced_products_for_any_price_range() {
        let mut products = six_products();
        products.push(product(
            "7",
            "Honeywell Smart Thermostat",
            "Thermostats",
            "Honeywell",
            "T9",
            None,
            None,
            None,
            StockStatus::InStock,
        ));
        let spec = FilterSpec {
            price_range: InclusiveRange::between(BigDecimal::from(1i64), BigDecimal::from(2i64)),
            btu_range: InclusiveRange::between(1, 2),
            ..Default::default()
        };

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result), vec!["7"]);
    }

    #[test]
    fn should_yield_empty_result_when_btu_bounds_inverted() {
        let products = six_products();
        let spec = FilterSpec {
            btu_range: InclusiveRange::between(48000, 24000),
            ..Default::default()
        };

        assert!(apply_filters(&products, &spec).is_empty());
    }

    #[test]
    fn should_exclude_unrated_products_when_rating_filter_set() {
        let mut products = six_products();
        products.push(product(
            "7",
            "Unrated Duct Kit",
            "Ductwork",
            "Carrier",
            "DK-1",
            None,
            None,
            None,
            StockStatus::InStock,
        ));
        let mut spec = FilterSpec::default();
        spec.toggle_energy_rating("14 SEER");
        spec.toggle_brand("Carrier");
        spec.toggle_brand("Goodman");

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn should_sort_by_btu_descending_with_stable_ties() {
        let products = six_products();
        let spec = FilterSpec {
            sort: SortKey::Btu,
            ..Default::default()
        };

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result), vec!["3", "2", "1", "6", "4", "5"]);
    }

    #[test]
    fn should_sort_by_brand() {
        let products = six_products();
        let spec = FilterSpec {
            sort: SortKey::Brand,
            ..Default::default()
        };

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result), vec!["1", "4", "3", "5", "2", "6"]);
    }

    #[test]
    fn should_treat_missing_price_as_zero_when_sorting() {
        let mut products = six_products();
        products.push(product(
            "7",
            "Filter Subscription",
            "Air Quality",
            "Lennox",
            "FS-1",
            None,
            None,
            None,
            StockStatus::InStock,
        ));
        let spec = FilterSpec {
            sort: SortKey::PriceLow,
            ..Default::default()
        };

        let result = apply_filters(&products, &spec);

        assert_eq!(ids(&result).first().map(String::as_str), Some("7"));
    }

    fn arb_stock() -> impl Strategy<Value = StockStatus> {
        prop_oneof![
            Just(StockStatus::InStock),
            Just(StockStatus::LowStock),
            Just(StockStatus::OutOfStock),
        ]
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(
            (
                "[A-Za-z ]{1,12}",
                prop_oneof![Just("Carrier"), Just("Trane"), Just("Rheem")],
                prop::option::of(0u64..1_000_000),
                prop::option::of(0u32..300_000),
                arb_stock(),
            ),
            0..24,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, brand, cents, btu, stock))| {
                    Product::from_repository(
                        ProductId::new(i.to_string()),
                        name,
                        "Air Conditioning".to_string(),
                        brand.to_string(),
                        format!("M-{i}"),
                        cents.map(|c| BigDecimal::new(c.into(), 2)),
                        btu,
                        None,
                        None,
                        None,
                        None,
                        stock,
                    )
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_default_spec_keeps_all_sorted_by_name(products in arb_products()) {
            let result = apply_filters(&products, &FilterSpec::default());

            prop_assert_eq!(result.len(), products.len());
            prop_assert!(result.windows(2).all(|w| w[0].name <= w[1].name));
        }

        #[test]
        fn prop_in_stock_only_never_returns_unavailable(products in arb_products()) {
            let spec = FilterSpec { in_stock_only: true, ..Default::default() };

            let result = apply_filters(&products, &spec);

            prop_assert!(result.iter().all(|p| p.in_stock == StockStatus::InStock));
        }

        #[test]
        fn prop_unpriced_products_pass_any_price_bounds(
            products in arb_products(),
            min in 0i64..10_000,
            max in 0i64..10_000,
        ) {
            let spec = FilterSpec {
                price_range: InclusiveRange::between(BigDecimal::from(min), BigDecimal::from(max)),
                ..Default::default()
            };

            let result = apply_filters(&products, &spec);

            let unpriced = products.iter().filter(|p| p.price.is_none()).count();
            let returned_unpriced = result.iter().filter(|p| p.price.is_none()).count();
            prop_assert_eq!(unpriced, returned_unpriced);
        }

        #[test]
        fn prop_price_orders_reverse_when_prices_distinct(products in arb_products()) {
            let mut seen = std::collections::HashSet::new();
            let distinct: Vec<Product> = products
                .into_iter()
                .filter(|p| seen.insert(price_or_zero(p)))
                .collect();

            let low = apply_filters(&distinct, &FilterSpec { sort: SortKey::PriceLow, ..Default::default() });
            let mut high = apply_filters(&distinct, &FilterSpec { sort: SortKey::PriceHigh, ..Default::default() });
            high.reverse();

            prop_assert_eq!(ids(&low), ids(&high));
        }

        #[test]
        fn prop_applying_same_spec_twice_is_identical(
            products in arb_products(),
            search in "[a-z]{0,2}",
            in_stock_only in any::<bool>(),
        ) {
            let spec = FilterSpec { search, in_stock_only, sort: SortKey::Btu, ..Default::default() };

            let first = apply_filters(&products, &spec);
            let second = apply_filters(&products, &spec);

            prop_assert_eq!(ids(&first), ids(&second));
        }
    }
}
