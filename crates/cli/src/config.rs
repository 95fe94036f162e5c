//! CLI Config

use clap::Args;
use stockroom::service::{DEFAULT_BASE_URL, ProductsApiConfig};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Products API settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// URL of the products collection
    #[arg(long, env = "PRODUCTS_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,
}

impl From<&ApiConfig> for ProductsApiConfig {
    fn from(config: &ApiConfig) -> Self {
        ProductsApiConfig::new(config.api_url.clone())
    }
}
