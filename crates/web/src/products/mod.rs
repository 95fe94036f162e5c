//! Product pages.

mod form;
mod list;

pub(crate) use form::ProductFormPage;
pub(crate) use list::ProductsPage;
