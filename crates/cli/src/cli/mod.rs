use clap::{Parser, Subcommand};
use stockroom::service::HttpProductsService;

use crate::{
    config::{ApiConfig, LoggingConfig},
    errors::CliError,
};

mod create;
mod delete;
mod fields;
mod get;
mod list;
mod stock_value;
mod update;

#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Stockroom inventory admin", long_about = None)]
pub(crate) struct Cli {
    /// Products API settings.
    #[command(flatten)]
    pub(crate) api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List one page of products
    List(list::ListArgs),

    /// Show a single product
    Get(get::GetArgs),

    /// Create a product
    Create(create::CreateArgs),

    /// Update a product; omitted fields keep their current values
    Update(update::UpdateArgs),

    /// Delete a product
    Delete(delete::DeleteArgs),

    /// Show the total value of the stock held
    StockValue,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), CliError> {
        let service = HttpProductsService::new((&self.api).into());

        match self.command {
            Commands::List(args) => list::run(args, &service).await,
            Commands::Get(args) => get::run(args, &service).await,
            Commands::Create(args) => create::run(args, &service).await,
            Commands::Update(args) => update::run(args, &service).await,
            Commands::Delete(args) => delete::run(args, &service).await,
            Commands::StockValue => stock_value::run(&service).await,
        }
    }
}
