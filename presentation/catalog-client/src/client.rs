use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use crate::payload::ProductPayload;
use crate::source::{CatalogSource, ClientError};

/// HTTP client for the catalog REST API.
///
/// `base_url` points at the API root, e.g. `http://127.0.0.1:8080/api`.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Request(format!("invalid base url {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Request(format!(
                "invalid base url {}",
                base_url
            )));
        }
        Ok(Self { http, base_url })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            error!(%url, "Catalog request failed: {}", e);
            ClientError::Request(e.to_string())
        })?;

        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status => {
                error!(%url, status = status.as_u16(), "Catalog request rejected");
                Err(ClientError::Status(status.as_u16()))
            }
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let payloads: Vec<ProductPayload> = self.get_json(self.url(&["products"])).await?;
        payloads.into_iter().map(Product::try_from).collect()
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<Product, ClientError> {
        let payload: ProductPayload = self.get_json(self.url(&["products", id.as_str()])).await?;
        Product::try_from(payload)
    }
}
