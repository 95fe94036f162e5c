//! Report
//!
//! Plain-text rendering of products for terminals.

use std::io;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::BRL};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{list::ProductList, products::Product, query::SortColumn};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output stream failed.
    #[error("failed to write report")]
    Io(#[from] io::Error),
}

/// Formats an amount in Brazilian reais.
pub fn format_money(value: Decimal) -> String {
    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.round().to_i64())
        .map_or_else(
            || format!("{value:.2} BRL"),
            |minor| Money::from_minor(minor, BRL).to_string(),
        )
}

/// Status label of a product.
pub fn status_label(product: &Product) -> &'static str {
    if product.active { "Active" } else { "Inactive" }
}

/// Writes the displayed page of `list` as a table, followed by a pagination
/// summary and the total stock value when known.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_page(mut out: impl io::Write, list: &ProductList) -> Result<(), ReportError> {
    if let Some(message) = list.error_message() {
        writeln!(out, "Error: {message}")?;

        return Ok(());
    }

    if list.products().is_empty() {
        writeln!(out, "No products found.")?;
    } else {
        let mut builder = Builder::default();
        let sort = list.sort();

        let mut header = vec!["ID".to_string()];

        header.extend(
            SortColumn::ALL
                .iter()
                .map(|column| format!("{} {}", column.label(), sort.indicator(*column))),
        );
        header.push("Status".to_string());

        builder.push_record(header);

        for product in list.products() {
            builder.push_record(product_row(product));
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..5), Alignment::right());

        writeln!(out, "{table}")?;
    }

    writeln!(
        out,
        "Page {} of {} ({} products)",
        list.current_page().saturating_add(1),
        list.total_pages().max(1),
        list.total_elements()
    )?;

    if let Some(value) = list.total_stock_value() {
        writeln!(out, "Total stock value: {}", format_money(value))?;
    }

    Ok(())
}

fn product_row(product: &Product) -> [String; 6] {
    let id = product
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());

    let price = if product.on_sale {
        format!("{} (on sale)", format_money(product.price))
    } else {
        format_money(product.price)
    };

    let stock = if product.low_stock {
        format!("{} ⚠", product.stock_quantity)
    } else {
        product.stock_quantity.to_string()
    };

    [
        id,
        product.name.clone(),
        product.category.clone(),
        price,
        stock,
        status_label(product).to_string(),
    ]
}

/// Writes every field of a single product.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_product(mut out: impl io::Write, product: &Product) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    let id = product
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());

    builder.push_record(["ID".to_string(), id]);
    builder.push_record(["Name".to_string(), product.name.clone()]);
    builder.push_record(["Category".to_string(), product.category.clone()]);
    builder.push_record([
        "Description".to_string(),
        product.description.clone().unwrap_or_default(),
    ]);
    builder.push_record(["Price".to_string(), format_money(product.price)]);
    builder.push_record(["Stock".to_string(), product.stock_quantity.to_string()]);
    builder.push_record([
        "Barcode".to_string(),
        product.barcode.clone().unwrap_or_default(),
    ]);
    builder.push_record(["Status".to_string(), status_label(product).to_string()]);
    builder.push_record(["On sale".to_string(), yes_no(product.on_sale).to_string()]);
    builder.push_record(["Low stock".to_string(), yes_no(product.low_stock).to_string()]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::first(), Color::BOLD);

    writeln!(out, "{table}")?;

    Ok(())
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
