use std::io;

use clap::Args;
use stockroom::{form::ProductForm, products::ProductId, report, service::ProductsService};

use crate::{cli::fields::FieldArgs, errors::CliError};

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Product id
    id: ProductId,

    #[command(flatten)]
    fields: FieldArgs,
}

pub(crate) async fn run(args: UpdateArgs, service: &dyn ProductsService) -> Result<(), CliError> {
    let current = service
        .get_product(args.id)
        .await
        .map_err(CliError::request("load product"))?;

    let mut form = ProductForm::edit(args.id);

    form.patch(&current);
    args.fields.apply(form.fields_mut());

    let product = form
        .submit(service)
        .await
        .map_err(CliError::submit("update product"))?;

    report::write_product(io::stdout().lock(), &product)?;

    Ok(())
}
