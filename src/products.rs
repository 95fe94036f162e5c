//! Products

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse().map(Self)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Product as returned by the products API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Absent until the server has stored the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,

    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units in stock
    pub stock_quantity: i32,

    /// Digits-only barcode
    #[serde(default)]
    pub barcode: Option<String>,

    /// Whether the product is active
    #[serde(default = "default_active")]
    pub active: bool,

    /// Whether the product is on sale
    #[serde(default)]
    pub on_sale: bool,

    /// Derived by the server, never sent back.
    #[serde(default, skip_serializing)]
    pub low_stock: bool,
}

const fn default_active() -> bool {
    true
}

/// Request body for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Display name
    pub name: String,
    /// Category name
    pub category: String,
    /// Free text, `None` when left blank
    pub description: Option<String>,
    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units in stock
    pub stock_quantity: i32,
    /// Digits-only barcode, `None` when left blank
    pub barcode: Option<String>,
    /// Whether the product is listed as active
    pub active: bool,
    /// Whether the product is on sale
    pub on_sale: bool,
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            category: product.category,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
            barcode: product.barcode,
            active: product.active,
            on_sale: product.on_sale,
        }
    }
}

/// One page of products plus pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Products on this page
    #[serde(default)]
    pub content: Vec<Product>,

    /// Number of products matching the query across all pages
    pub total_elements: u64,

    /// Number of pages for the query
    pub total_pages: u32,

    /// Page size
    #[serde(default)]
    pub size: u32,

    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
}

/// Total value of the stock held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockValue {
    /// Sum of `price * stockQuantity` over active products
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}
