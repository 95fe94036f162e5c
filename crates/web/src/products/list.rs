use leptos::{prelude::*, task::spawn_local};
use stockroom::{
    list::{DeleteError, ListOutcome, ListRequest, ProductList},
    products::Product,
    query::SortColumn,
    report::{format_money, status_label},
    service::ProductsService,
};

use crate::{
    Route,
    api::{alert, service},
};

/// Sends `request`, applies the response and follows any clamp refetch.
///
/// Responses arriving after the view is gone, or after a newer request, are
/// dropped.
fn fetch(list: RwSignal<ProductList>, request: ListRequest) {
    spawn_local(async move {
        let mut request = request;

        loop {
            let generation = request.generation();
            let result = service().list_products(request.into_query()).await;

            match list.try_update(|list| list.apply(generation, result)) {
                Some(ListOutcome::Refetch(next)) => request = next,
                Some(ListOutcome::Applied | ListOutcome::Stale) | None => break,
            }
        }
    });
}

fn fetch_total_stock_value(list: RwSignal<ProductList>) {
    spawn_local(async move {
        let result = service().total_stock_value().await;

        list.update(|list| list.apply_total_stock_value(result));
    });
}

/// Runs a list intent and fetches the request it issued, if any.
fn dispatch(
    list: RwSignal<ProductList>,
    intent: impl FnOnce(&mut ProductList) -> Option<ListRequest>,
) {
    if let Some(request) = list.try_update(intent).flatten() {
        fetch(list, request);
    }
}

/// Sends the confirmed delete once; repeat clicks while it is in flight do
/// nothing.
fn confirm_delete(list: RwSignal<ProductList>) {
    let Some(Some(id)) = list.try_update(ProductList::begin_delete) else {
        return;
    };

    spawn_local(async move {
        let result = service().delete_product(id).await;

        match list.try_update(|list| list.finish_delete(result)) {
            Some(Ok(request)) => {
                fetch(list, request);
                fetch_total_stock_value(list);
            }
            Some(Err(DeleteError::NotPending)) | None => {}
            Some(Err(error)) => alert(&error.to_string()),
        }
    });
}

fn page_label(list: &ProductList) -> String {
    format!(
        "Page {} of {}",
        list.current_page().saturating_add(1),
        list.total_pages()
    )
}

#[component]
fn Filters(list: RwSignal<ProductList>) -> impl IntoView {
    view! {
        <div class="filters">
            <input
                type="text"
                placeholder="Search by name"
                prop:value=move || list.with(|list| list.filter_name().to_string())
                on:input=move |event| {
                    let value = event_target_value(&event);

                    dispatch(list, move |list| Some(list.set_filter_name(value)));
                }
            />
            <input
                type="text"
                placeholder="Filter by category"
                prop:value=move || list.with(|list| list.filter_category().to_string())
                on:input=move |event| {
                    let value = event_target_value(&event);

                    dispatch(list, move |list| Some(list.set_filter_category(value)));
                }
            />
        </div>
    }
}

#[component]
fn StockValueBanner(list: RwSignal<ProductList>) -> impl IntoView {
    move || match list.with(ProductList::total_stock_value) {
        Some(value) => view! {
            <div class="stock-info">
                <strong>"Total stock value: "</strong>
                {format_money(value)}
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}

#[component]
fn SortHeading(list: RwSignal<ProductList>, column: SortColumn) -> impl IntoView {
    view! {
        <th>
            <button
                type="button"
                class="sort-heading"
                on:click=move |_| dispatch(list, move |list| Some(list.sort_by(column)))
            >
                {column.label()}
                " "
                <span class="sort-indicator" aria-hidden="true">
                    {move || list.with(|list| list.sort().indicator(column))}
                </span>
            </button>
        </th>
    }
}

#[component]
fn ProductRow(
    product: Product,
    list: RwSignal<ProductList>,
    route: RwSignal<Route>,
) -> impl IntoView {
    let status_class = if product.active { "active" } else { "inactive" };
    let stock_class = if product.low_stock { "low-stock" } else { "" };

    let sale_badge = product
        .on_sale
        .then(|| view! { <span class="badge-sale">"On sale"</span> });

    let low_stock_icon = product.low_stock.then(|| {
        view! {
            <span class="warning-icon" title="Low stock">"⚠️"</span>
        }
    });

    let actions = product.id.map(|id| {
        view! {
            <button
                type="button"
                class="btn-edit"
                on:click=move |_| route.set(Route::EditProduct(id))
            >
                "Edit"
            </button>
            <button
                type="button"
                class="btn-delete"
                on:click=move |_| list.update(|list| list.request_delete(id))
            >
                "Delete"
            </button>
        }
    });

    view! {
        <tr>
            <td>{product.name.clone()}</td>
            <td>{product.category.clone()}</td>
            <td>{format_money(product.price)}{sale_badge}</td>
            <td class=stock_class>{product.stock_quantity}{low_stock_icon}</td>
            <td>
                <span class=status_class>{status_label(&product)}</span>
            </td>
            <td>{actions}</td>
        </tr>
    }
}

#[component]
fn ProductTable(list: RwSignal<ProductList>, route: RwSignal<Route>) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    {SortColumn::ALL
                        .into_iter()
                        .map(|column| view! { <SortHeading list=list column=column /> })
                        .collect_view()}
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let products = list.with(|list| list.products().to_vec());

                    if products.is_empty() {
                        return view! {
                            <tr>
                                <td colspan="6" class="empty">"No products found."</td>
                            </tr>
                        }
                        .into_any();
                    }

                    products
                        .into_iter()
                        .map(|product| view! { <ProductRow product=product list=list route=route /> })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn Pagination(list: RwSignal<ProductList>) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                type="button"
                disabled=move || !list.with(ProductList::has_previous_page)
                on:click=move |_| dispatch(list, ProductList::previous_page)
            >
                "Previous"
            </button>
            <span>{move || list.with(page_label)}</span>
            <button
                type="button"
                disabled=move || !list.with(ProductList::has_next_page)
                on:click=move |_| dispatch(list, ProductList::next_page)
            >
                "Next"
            </button>
        </div>
    }
}

#[component]
fn DeleteModal(list: RwSignal<ProductList>) -> impl IntoView {
    move || {
        if !list.with(ProductList::show_delete_modal) {
            return ().into_any();
        }

        let deleting = move || list.with(ProductList::is_deleting);

        view! {
            <div class="modal-overlay">
                <div class="modal-content" role="dialog" aria-modal="true">
                    <h3>"Confirm deletion"</h3>
                    <p>
                        "Are you sure you want to delete this product? This action cannot be undone."
                    </p>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=deleting
                            on:click=move |_| list.update(ProductList::cancel_delete)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="btn-danger"
                            disabled=deleting
                            on:click=move |_| confirm_delete(list)
                        >
                            {move || if deleting() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}

/// Failure of the last fetch, shown above the rows that were already loaded.
#[component]
fn ListError(list: RwSignal<ProductList>) -> impl IntoView {
    move || {
        list.with(|list| list.error_message().map(str::to_string))
            .map(|message| {
                view! {
                    <div class="error-message">
                        <h3>"Error:"</h3>
                        <p>{message}</p>
                    </div>
                }
            })
    }
}

/// Product list page: filters, stock value, sortable table, pagination and
/// the delete confirmation modal.
#[component]
pub fn ProductsPage(
    /// Current page of the app, for edit and create navigation.
    route: RwSignal<Route>,
) -> impl IntoView {
    let list = RwSignal::new(ProductList::new());

    dispatch(list, |list| Some(list.refresh()));
    fetch_total_stock_value(list);

    view! {
        <div class="container">
            <h2>"Products"</h2>
            <div class="actions">
                <button
                    type="button"
                    class="btn-primary"
                    on:click=move |_| route.set(Route::NewProduct)
                >
                    "New product"
                </button>
                <Filters list=list />
            </div>
            <StockValueBanner list=list />
            <ListError list=list />
            {move || {
                if list.with(ProductList::is_loading) {
                    return view! { <div class="loading">"Loading products..."</div> }.into_any();
                }

                view! {
                    <ProductTable list=list route=route />
                    <Pagination list=list />
                }
                .into_any()
            }}
            <DeleteModal list=list />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use stockroom::products::ProductPage;

    use super::*;

    #[test]
    fn page_label_is_one_based() {
        let mut list = ProductList::new();
        let request = list.refresh();

        list.apply(
            request.generation(),
            Ok(ProductPage {
                content: Vec::new(),
                total_elements: 25,
                total_pages: 3,
                size: 10,
                number: 0,
            }),
        );

        assert_eq!(page_label(&list), "Page 1 of 3");
    }
}
