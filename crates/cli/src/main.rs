//! Stockroom command line client

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

mod cli;
mod config;
mod errors;
mod logging;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            #[expect(clippy::print_stderr, reason = "command errors are shown to the user")]
            {
                eprintln!("{error}");
            }

            ExitCode::FAILURE
        }
    }
}
