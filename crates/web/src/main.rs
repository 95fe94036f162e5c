//! Stockroom inventory admin, rendered in the browser

use leptos::prelude::*;
use stockroom::products::ProductId;
use wasm_bindgen::JsValue;

mod api;
mod logging;
mod products;

/// Page shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    /// Product list
    Products,

    /// Empty form for a new product
    NewProduct,

    /// Form bound to an existing product
    EditProduct(ProductId),
}

/// Main app shell.
#[component]
fn App() -> impl IntoView {
    let route = RwSignal::new(Route::Products);

    view! {
        <header class="app-header">
            <div class="header-content">
                <h1 class="logo">"📦 Stockroom"</h1>
                <nav>
                    <span class="user-greeting">"Welcome, Admin"</span>
                </nav>
            </div>
        </header>
        <main>
            {move || match route.get() {
                Route::Products => view! { <products::ProductsPage route=route /> }.into_any(),
                Route::NewProduct => {
                    view! { <products::ProductFormPage product_id=None route=route /> }.into_any()
                }
                Route::EditProduct(id) => {
                    view! { <products::ProductFormPage product_id=Some(id) route=route /> }
                        .into_any()
                }
            }}
        </main>
        <footer>
            <p>"Stockroom inventory management"</p>
        </footer>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = logging::init_subscriber() {
        web_sys::console::error_1(&JsValue::from_str(&error.to_string()));
    }

    leptos::mount::mount_to_body(App);
}
