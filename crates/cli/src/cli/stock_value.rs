use std::io::{self, Write};

use stockroom::{report, service::ProductsService};

use crate::errors::CliError;

pub(crate) async fn run(service: &dyn ProductsService) -> Result<(), CliError> {
    let value = service
        .total_stock_value()
        .await
        .map_err(CliError::request("load total stock value"))?;

    writeln!(
        io::stdout().lock(),
        "Total stock value: {}",
        report::format_money(value)
    )?;

    Ok(())
}
