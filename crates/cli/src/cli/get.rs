use std::io;

use clap::Args;
use stockroom::{products::ProductId, report, service::ProductsService};

use crate::errors::CliError;

#[derive(Debug, Args)]
pub(crate) struct GetArgs {
    /// Product id
    id: ProductId,
}

pub(crate) async fn run(args: GetArgs, service: &dyn ProductsService) -> Result<(), CliError> {
    let product = service
        .get_product(args.id)
        .await
        .map_err(CliError::request("load product"))?;

    report::write_product(io::stdout().lock(), &product)?;

    Ok(())
}
