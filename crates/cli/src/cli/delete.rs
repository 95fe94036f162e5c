use std::io::{self, BufRead, Write};

use clap::Args;
use stockroom::{list::ProductList, products::ProductId, report, service::ProductsService};
use tracing::info;

use crate::errors::CliError;

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Product id
    id: ProductId,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub(crate) async fn run(args: DeleteArgs, service: &dyn ProductsService) -> Result<(), CliError> {
    let mut list = ProductList::new();

    list.request_delete(args.id);

    if !args.yes && !confirm(io::stdin().lock(), io::stdout().lock(), args.id)? {
        list.cancel_delete();

        info!(product_id = %args.id, "delete canceled");

        writeln!(io::stdout().lock(), "Kept product {}.", args.id)?;

        return Ok(());
    }

    list.confirm_delete(service).await?;

    let mut out = io::stdout().lock();

    writeln!(out, "Deleted product {}.", args.id)?;
    report::write_page(out, &list)?;

    Ok(())
}

/// Asks before deleting; only an explicit yes confirms.
fn confirm(mut input: impl BufRead, mut output: impl Write, id: ProductId) -> io::Result<bool> {
    write!(
        output,
        "Are you sure you want to delete product {id}? This action cannot be undone. [y/N] "
    )?;
    output.flush()?;

    let mut answer = String::new();

    input.read_line(&mut answer)?;

    let answer = answer.trim();

    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
