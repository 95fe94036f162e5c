//! Products API access from the browser.

use stockroom::service::{DEFAULT_BASE_URL, HttpProductsService, ProductsApiConfig};
use tracing::warn;

/// Products collection URL, fixed at build time.
const PRODUCTS_API_URL: &str = match option_env!("PRODUCTS_API_URL") {
    Some(url) => url,
    None => DEFAULT_BASE_URL,
};

/// Client for the configured products API.
pub(crate) fn service() -> HttpProductsService {
    HttpProductsService::new(ProductsApiConfig::new(PRODUCTS_API_URL))
}

/// Shows a blocking browser alert.
pub(crate) fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!(alert = message, "window is unavailable");
        return;
    };

    if let Err(error) = window.alert_with_message(message) {
        warn!(?error, alert = message, "failed to show alert");
    }
}
