//! Products service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    products::{Product, ProductId, ProductInput, ProductPage},
    query::ListQuery,
};

pub mod errors;
mod http;

pub use errors::ProductsServiceError;
pub use http::{DEFAULT_BASE_URL, HttpProductsService, ProductsApiConfig};

/// Remote product store.
///
/// Futures are not required to be `Send`: the browser client drives them on a
/// single thread.
#[automock]
#[async_trait(?Send)]
pub trait ProductsService {
    /// Retrieves one page of products.
    async fn list_products(&self, query: ListQuery) -> Result<ProductPage, ProductsServiceError>;

    /// Retrieves a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError>;

    /// Creates a product; the server assigns its id.
    async fn create_product(&self, product: ProductInput) -> Result<Product, ProductsServiceError>;

    /// Replaces the fields of an existing product.
    async fn update_product(
        &self,
        id: ProductId,
        product: ProductInput,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductsServiceError>;

    /// Total value of the stock held.
    async fn total_stock_value(&self) -> Result<Decimal, ProductsServiceError>;
}
