//! Stockroom prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    form::{FormMode, ProductFields, ProductForm, Submission, SubmitError},
    list::{DeleteError, DeleteState, ListOutcome, ListRequest, ProductList},
    products::{Product, ProductId, ProductInput, ProductPage, StockValue},
    query::{ListQuery, PAGE_SIZE, Sort, SortColumn, SortDirection},
    service::{
        DEFAULT_BASE_URL, HttpProductsService, ProductsApiConfig, ProductsService,
        ProductsServiceError,
    },
    validation::{Field, ValidationError, ValidationErrors},
};
