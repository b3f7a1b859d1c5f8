use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use storefront_catalog::{
    ApiResponse, PRODUCT_NOT_FOUND, PageRequest, PaginatedResponse, PriceRange, Product,
    ProductFilter, ProductSort,
};

use crate::error::ClientError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote catalog operations.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn products(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> Result<PaginatedResponse<Product>, ClientError>;

    /// `Ok(None)` when the API reports the product does not exist.
    async fn product(&self, id: &str) -> Result<Option<Product>, ClientError>;

    async fn categories(&self) -> Result<Vec<String>, ClientError>;

    async fn price_range(&self) -> Result<PriceRange, ClientError>;
}

/// [`CatalogApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base: Url,
    http: reqwest::Client,
}

impl HttpCatalogClient {
    /// `base_url` is the server root, e.g. `http://localhost:3333`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!("{base_url} cannot be a base")));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self { base, http })
    }

    /// Check connectivity by hitting the health endpoint.
    pub async fn check_connectivity(&self) -> bool {
        match self.endpoint(&["health"]) {
            Ok(url) => self
                .http
                .get(url)
                .send()
                .await
                .is_ok_and(|r| r.status().is_success()),
            Err(_) => false,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, ApiResponse<T>), ClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(envelope) => Ok((status, envelope)),
            Err(e) if status.is_success() => Err(ClientError::Parse(e.to_string())),
            // Non-JSON error page (proxy, crash): keep the raw body.
            Err(_) => Err(ClientError::Api(status.as_u16(), body)),
        }
    }

    async fn fetch_data<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let (status, envelope) = self.fetch(req).await?;
        envelope
            .into_result()
            .map_err(|msg| ClientError::Api(status.as_u16(), msg))
    }
}

/// Query string for a listing; absent filter fields are omitted.
pub fn listing_params(
    filter: &ProductFilter,
    sort: ProductSort,
    page: PageRequest,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", page.page.to_string()),
        ("pageSize", page.page_size.to_string()),
    ];
    if let Some(category) = filter.category.as_ref().filter(|c| !c.is_empty()) {
        params.push(("category", category.clone()));
    }
    if let Some(min) = filter.min_price {
        params.push(("minPrice", min.to_string()));
    }
    if let Some(max) = filter.max_price {
        params.push(("maxPrice", max.to_string()));
    }
    if let Some(in_stock) = filter.in_stock {
        params.push(("inStock", in_stock.to_string()));
    }
    if let Some(term) = filter.search_term.as_ref().filter(|t| !t.is_empty()) {
        params.push(("searchTerm", term.clone()));
    }
    if sort != ProductSort::default() {
        params.push(("sort", sort.to_string()));
    }
    params
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn products(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> Result<PaginatedResponse<Product>, ClientError> {
        let url = self.endpoint(&["api", "products"])?;
        let req = self.http.get(url).query(&listing_params(filter, sort, page));
        self.fetch_data(req).await
    }

    async fn product(&self, id: &str) -> Result<Option<Product>, ClientError> {
        let url = self.endpoint(&["api", "products", id])?;
        let (status, envelope) = self.fetch::<Product>(self.http.get(url)).await?;
        // Any other 404 (wrong base path, missing route) is a real failure.
        if status == StatusCode::NOT_FOUND && envelope.error.as_deref() == Some(PRODUCT_NOT_FOUND) {
            return Ok(None);
        }
        envelope
            .into_result()
            .map(Some)
            .map_err(|msg| ClientError::Api(status.as_u16(), msg))
    }

    async fn categories(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(&["api", "products-metadata", "categories"])?;
        self.fetch_data(self.http.get(url)).await
    }

    async fn price_range(&self) -> Result<PriceRange, ClientError> {
        let url = self.endpoint(&["api", "products-metadata", "price-range"])?;
        self.fetch_data(self.http.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Price;

    #[test]
    fn listing_params_omit_absent_fields() {
        let params = listing_params(&ProductFilter::new(), ProductSort::Id, PageRequest::default());
        assert_eq!(
            params,
            vec![("page", "1".to_string()), ("pageSize", "12".to_string())]
        );
    }

    #[test]
    fn listing_params_carry_every_filter() {
        let filter = ProductFilter::new()
            .with_category("Books")
            .with_min_price(Price::from_cents(5000))
            .with_max_price(Price::from_cents(15050))
            .with_in_stock(false)
            .with_search_term("novel");
        let params = listing_params(&filter, ProductSort::Rating, PageRequest::new(3, 6).unwrap());
        assert_eq!(
            params,
            vec![
                ("page", "3".to_string()),
                ("pageSize", "6".to_string()),
                ("category", "Books".to_string()),
                ("minPrice", "50.00".to_string()),
                ("maxPrice", "150.50".to_string()),
                ("inStock", "false".to_string()),
                ("searchTerm", "novel".to_string()),
                ("sort", "rating".to_string()),
            ]
        );
    }

    #[test]
    fn endpoints_escape_path_segments() {
        let client = HttpCatalogClient::new("http://localhost:3333/").unwrap();
        let url = client.endpoint(&["api", "products", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3333/api/products/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            HttpCatalogClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpCatalogClient::new("mailto:shop@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
