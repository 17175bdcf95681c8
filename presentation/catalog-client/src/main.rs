use std::collections::BTreeSet;
use std::env;

use anyhow::Context;
use dotenvy::dotenv;

use business::domain::product::filter::FilterSpec;
use business::domain::product::value_objects::SortKey;
use catalog_client::browser::{CatalogBrowser, LoadState};
use catalog_client::client::CatalogClient;

/// Fetches the catalog once and prints the products matching the filters
/// given in the environment.
///
/// - CATALOG_API_URL: API root (default: "http://127.0.0.1:8080/api")
/// - CATALOG_SEARCH: case-insensitive text over name, brand and model
/// - CATALOG_CATEGORIES: comma-separated categories
/// - CATALOG_SORT: name | price-low | price-high | btu | brand
/// - CATALOG_IN_STOCK_ONLY: "true" to hide low and out-of-stock items
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let base_url =
        env::var("CATALOG_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080/api".to_string());
    let client = CatalogClient::new(&base_url)?;

    let mut browser = CatalogBrowser::with_filters(filters_from_env()?);
    browser.load(&client).await;

    if let LoadState::Failed(message) = browser.state() {
        anyhow::bail!("could not load catalog from {}: {}", base_url, message);
    }

    let results = browser.results();
    println!(
        "{} products ({} active filters, sorted by {})",
        results.len(),
        browser.filters().active_filter_count(),
        browser.filters().sort
    );
    for product in results {
        let price = product
            .price
            .as_ref()
            .map(|p| format!("${}", p))
            .unwrap_or_else(|| "call for price".to_string());
        println!(
            "{:>4}  {:<60} {:>14}  {}",
            product.id, product.name, price, product.in_stock
        );
    }

    Ok(())
}

fn filters_from_env() -> anyhow::Result<FilterSpec> {
    let mut filters = FilterSpec {
        search: env::var("CATALOG_SEARCH").unwrap_or_default(),
        in_stock_only: env::var("CATALOG_IN_STOCK_ONLY").is_ok_and(|v| v.trim() == "true"),
        ..Default::default()
    };

    if let Ok(categories) = env::var("CATALOG_CATEGORIES") {
        filters.categories = parse_categories(&categories);
    }

    if let Ok(sort) = env::var("CATALOG_SORT") {
        filters.sort = sort
            .parse::<SortKey>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("CATALOG_SORT")?;
    }

    Ok(filters)
}

/// Repeated entries collapse into one restriction.
fn parse_categories(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
