use std::io;

use clap::Args;
use stockroom::{form::ProductForm, report, service::ProductsService};

use crate::{cli::fields::FieldArgs, errors::CliError};

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    #[command(flatten)]
    fields: FieldArgs,
}

pub(crate) async fn run(args: CreateArgs, service: &dyn ProductsService) -> Result<(), CliError> {
    let mut form = ProductForm::create();

    args.fields.apply(form.fields_mut());

    let product = form
        .submit(service)
        .await
        .map_err(CliError::submit("create product"))?;

    report::write_product(io::stdout().lock(), &product)?;

    Ok(())
}
