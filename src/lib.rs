//! Stockroom
//!
//! Client-side core of the Stockroom inventory admin: the product model, a
//! typed client for the products REST API, form validation, and the state of
//! the product list and product form views.

pub mod form;
pub mod list;
pub mod prelude;
pub mod products;
pub mod query;
pub mod report;
pub mod service;
pub mod validation;
