use std::io;

use clap::{Args, ValueEnum};
use stockroom::{
    list::ProductList,
    query::{ListQuery, PAGE_SIZE, Sort, SortColumn, SortDirection},
    report,
    service::ProductsService,
};

use crate::errors::CliError;

/// Sortable columns, as named on the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum SortKey {
    #[default]
    Name,
    Category,
    Price,
    Stock,
}

impl From<SortKey> for SortColumn {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortColumn::Name,
            SortKey::Category => SortColumn::Category,
            SortKey::Price => SortColumn::Price,
            SortKey::Stock => SortColumn::StockQuantity,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Only products whose name contains this text
    #[arg(long, default_value = "")]
    name: String,

    /// Only products whose category contains this text
    #[arg(long, default_value = "")]
    category: String,

    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    sort: SortKey,

    /// Sort in descending order
    #[arg(long)]
    desc: bool,
}

impl ListArgs {
    fn query(self) -> ListQuery {
        ListQuery {
            page: self.page.saturating_sub(1),
            size: PAGE_SIZE,
            name: self.name,
            category: self.category,
            sort: Sort {
                column: self.sort.into(),
                direction: if self.desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                },
            },
        }
    }
}

pub(crate) async fn run(args: ListArgs, service: &dyn ProductsService) -> Result<(), CliError> {
    let mut list = ProductList::new();
    let request = list.set_query(args.query());

    list.run(service, request).await;

    if let Some(message) = list.error_message() {
        return Err(CliError::Failed(message.to_string()));
    }

    list.load_total_stock_value(service).await;

    report::write_page(io::stdout().lock(), &list)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_one_based_on_the_command_line() {
        let query = ListArgs {
            page: 3,
            name: "mug".to_string(),
            category: String::new(),
            sort: SortKey::Stock,
            desc: true,
        }
        .query();

        assert_eq!(query.page, 2);
        assert_eq!(query.sort.to_string(), "stockQuantity,desc");
        assert_eq!(query.name, "mug");
    }
}
