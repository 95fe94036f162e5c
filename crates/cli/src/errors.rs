//! CLI errors.

use std::io;

use stockroom::{
    form::SubmitError,
    list::DeleteError,
    report::ReportError,
    service::ProductsServiceError,
    validation::ValidationErrors,
};
use thiserror::Error;

/// Why a command failed.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// A products API call failed.
    #[error("failed to {action}: {source} {}", .source.detail())]
    Request {
        action: &'static str,
        #[source]
        source: ProductsServiceError,
    },

    /// A user-facing failure reported by a controller.
    #[error("{0}")]
    Failed(String),

    /// The product fields broke validation rules; nothing was sent.
    #[error("invalid product:{}", bullet_list(.0))]
    Invalid(ValidationErrors),

    #[error("{0}")]
    Delete(#[from] DeleteError),

    #[error("failed to write output: {0}")]
    Report(#[from] ReportError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    pub(crate) fn request(action: &'static str) -> impl FnOnce(ProductsServiceError) -> Self {
        move |source| Self::Request { action, source }
    }

    pub(crate) fn submit(action: &'static str) -> impl FnOnce(SubmitError) -> Self {
        move |error| match error {
            SubmitError::Invalid(errors) => Self::Invalid(errors),
            SubmitError::Service(source) => Self::Request { action, source },
            SubmitError::InFlight => Self::Failed("a submission is already in progress".to_string()),
        }
    }
}

fn bullet_list(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|error| format!("\n  - {error}"))
        .collect()
}
