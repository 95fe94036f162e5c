//! HTTP client for the products API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    products::{Product, ProductId, ProductInput, ProductPage, StockValue},
    query::ListQuery,
    service::{ProductsService, ProductsServiceError},
};

/// Products collection used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/produtos";

/// Configuration for connecting to the products API.
#[derive(Debug, Clone)]
pub struct ProductsApiConfig {
    /// URL of the products collection, e.g. `"http://localhost:8080/api/produtos"`.
    pub base_url: String,
}

impl ProductsApiConfig {
    /// Configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ProductsApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// [`ProductsService`] backed by the products REST API.
#[derive(Debug, Clone)]
pub struct HttpProductsService {
    base_url: String,
    http: Client,
}

impl HttpProductsService {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ProductsApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Products collection URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn list_request(&self, query: &ListQuery) -> RequestBuilder {
        self.http.get(&self.base_url).query(query.params().as_slice())
    }
}

#[async_trait(?Send)]
impl ProductsService for HttpProductsService {
    #[tracing::instrument(
        name = "products.client.list",
        skip(self, query),
        fields(page = query.page, sort = %query.sort),
        err
    )]
    async fn list_products(&self, query: ListQuery) -> Result<ProductPage, ProductsServiceError> {
        let page: ProductPage = read_json(send(self.list_request(&query)).await?).await?;

        debug!(
            total_elements = page.total_elements,
            total_pages = page.total_pages,
            "fetched products page"
        );

        Ok(page)
    }

    #[tracing::instrument(name = "products.client.get", skip(self), fields(product_id = %id), err)]
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError> {
        read_json(send(self.http.get(self.product_url(id))).await?).await
    }

    #[tracing::instrument(name = "products.client.create", skip(self, product), err)]
    async fn create_product(&self, product: ProductInput) -> Result<Product, ProductsServiceError> {
        let created: Product =
            read_json(send(self.http.post(&self.base_url).json(&product)).await?).await?;

        debug!(product_id = ?created.id, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.client.update",
        skip(self, product),
        fields(product_id = %id),
        err
    )]
    async fn update_product(
        &self,
        id: ProductId,
        product: ProductInput,
    ) -> Result<Product, ProductsServiceError> {
        read_json(send(self.http.put(self.product_url(id)).json(&product)).await?).await
    }

    #[tracing::instrument(name = "products.client.delete", skip(self), fields(product_id = %id), err)]
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError> {
        send(self.http.delete(self.product_url(id))).await?;

        debug!(product_id = %id, "deleted product");

        Ok(())
    }

    #[tracing::instrument(name = "products.client.total_stock_value", skip(self), err)]
    async fn total_stock_value(&self) -> Result<Decimal, ProductsServiceError> {
        let url = format!("{}/total-estoque", self.base_url);
        let value: StockValue = read_json(send(self.http.get(url)).await?).await?;

        Ok(value.total_value)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ProductsServiceError> {
    let response = request
        .send()
        .await
        .map_err(ProductsServiceError::Transport)?;

    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ProductsServiceError::NotFound);
    }

    if !status.is_success() {
        return Err(ProductsServiceError::Status(status));
    }

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ProductsServiceError> {
    response.json().await.map_err(ProductsServiceError::Decode)
}
