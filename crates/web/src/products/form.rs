use std::collections::HashSet;

use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use stockroom::{
    form::{FormMode, ProductForm, Submission},
    products::ProductId,
    service::ProductsService,
    validation::{DESCRIPTION_MAX_CHARS, Field},
};

use crate::{Route, api::service};

const FIELDS: [Field; 6] = [
    Field::Name,
    Field::Category,
    Field::Description,
    Field::Price,
    Field::StockQuantity,
    Field::Barcode,
];

/// DOM id of a field's input.
const fn input_id(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Category => "category",
        Field::Description => "description",
        Field::Price => "price",
        Field::StockQuantity => "stockQuantity",
        Field::Barcode => "barcode",
    }
}

const fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "e.g. Plastic mug, Coloured pencil...",
        Field::Category => "e.g. Stationery, Kitchen...",
        Field::Description => "e.g. Short product description...",
        Field::Price => "e.g. 500.00",
        Field::StockQuantity => "e.g. 20",
        Field::Barcode => "e.g. 1234567890",
    }
}

const fn is_required(field: Field) -> bool {
    matches!(
        field,
        Field::Name | Field::Category | Field::Price | Field::StockQuantity
    )
}

fn field_label(field: Field) -> String {
    if is_required(field) {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

fn description_counter(form: &ProductForm) -> String {
    format!(
        "{} / {DESCRIPTION_MAX_CHARS}",
        form.fields().description.chars().count()
    )
}

/// Messages for `field`, shown once the user has left it.
fn field_errors(form: &ProductForm, touched: &HashSet<Field>, field: Field) -> Vec<String> {
    if !touched.contains(&field) {
        return Vec::new();
    }

    form.errors()
        .for_field(field)
        .map(ToString::to_string)
        .collect()
}

fn load(form: RwSignal<ProductForm>, id: ProductId) {
    spawn_local(async move {
        let result = service().get_product(id).await;

        form.update(|form| form.apply_loaded(result));
    });
}

fn submit(form: RwSignal<ProductForm>, touched: RwSignal<HashSet<Field>>, route: RwSignal<Route>) {
    let Some(Ok(submission)) = form.try_update(ProductForm::begin_submit) else {
        touched.set(FIELDS.into_iter().collect());
        return;
    };

    spawn_local(async move {
        let service = service();

        let result = match submission {
            Submission::Create(input) => service.create_product(input).await,
            Submission::Update(id, input) => service.update_product(id, input).await,
        };

        let saved = form.try_update(|form| form.finish_submit(result).is_ok());

        if saved == Some(true) {
            route.set(Route::Products);
        }
    });
}

#[component]
fn FieldErrors(
    form: RwSignal<ProductForm>,
    touched: RwSignal<HashSet<Field>>,
    field: Field,
) -> impl IntoView {
    move || {
        let messages = form.with(|form| touched.with(|touched| field_errors(form, touched, field)));

        messages
            .into_iter()
            .map(|message| view! { <div class="error">{message}</div> })
            .collect_view()
    }
}

#[component]
fn TextInput(
    form: RwSignal<ProductForm>,
    touched: RwSignal<HashSet<Field>>,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=input_id(field)>{field_label(field)}</label>
            <input
                id=input_id(field)
                type=input_type
                class="form-control"
                placeholder=placeholder(field)
                prop:value=move || form.with(|form| form.fields().text(field).to_string())
                on:input=move |event| {
                    let value = event_target_value(&event);

                    form.update(|form| form.fields_mut().set_text(field, value));
                }
                on:blur=move |_| {
                    touched.update(|touched| {
                        touched.insert(field);
                    });
                }
            />
            <FieldErrors form=form touched=touched field=field />
        </div>
    }
}

#[component]
fn DescriptionInput(form: RwSignal<ProductForm>, touched: RwSignal<HashSet<Field>>) -> impl IntoView {
    let field = Field::Description;

    view! {
        <div class="form-group">
            <label for=input_id(field)>{field_label(field)}</label>
            <textarea
                id=input_id(field)
                class="form-control"
                maxlength=DESCRIPTION_MAX_CHARS.to_string()
                placeholder=placeholder(field)
                prop:value=move || form.with(|form| form.fields().description.clone())
                on:input=move |event| {
                    let value = event_target_value(&event);

                    form.update(|form| form.fields_mut().description = value);
                }
                on:blur=move |_| {
                    touched.update(|touched| {
                        touched.insert(field);
                    });
                }
            ></textarea>
            <div class="char-counter">{move || form.with(description_counter)}</div>
            <FieldErrors form=form touched=touched field=field />
        </div>
    }
}

#[component]
fn Toggles(form: RwSignal<ProductForm>) -> impl IntoView {
    view! {
        <div class="form-group checkbox-group">
            <label for="active">
                <input
                    id="active"
                    type="checkbox"
                    prop:checked=move || form.with(|form| form.fields().active)
                    on:change=move |event| {
                        let checked = event_target_checked(&event);

                        form.update(|form| form.fields_mut().active = checked);
                    }
                />
                "Active"
            </label>
        </div>
        <div class="form-group checkbox-group">
            <label for="onSale">
                <input
                    id="onSale"
                    type="checkbox"
                    prop:checked=move || form.with(|form| form.fields().on_sale)
                    on:change=move |event| {
                        let checked = event_target_checked(&event);

                        form.update(|form| form.fields_mut().on_sale = checked);
                    }
                />
                "On sale"
            </label>
        </div>
    }
}

/// Create/edit form page. Edit mode when `product_id` is set.
#[component]
pub fn ProductFormPage(
    /// Product being edited; `None` creates a new one.
    product_id: Option<ProductId>,
    /// Current page of the app, set back to the list after saving.
    route: RwSignal<Route>,
) -> impl IntoView {
    let form = RwSignal::new(ProductForm::for_route(product_id));
    let touched = RwSignal::new(HashSet::<Field>::new());

    if let Some(id) = product_id {
        load(form, id);
    }

    let title = match form.with_untracked(ProductForm::mode) {
        FormMode::Create => "New product",
        FormMode::Edit(_) => "Edit product",
    };

    view! {
        <div class="container form-container">
            <h2>{title}</h2>
            <form on:submit=move |event: SubmitEvent| {
                event.prevent_default();
                submit(form, touched, route);
            }>
                <TextInput form=form touched=touched field=Field::Name />
                <TextInput form=form touched=touched field=Field::Category />
                <DescriptionInput form=form touched=touched />
                <TextInput form=form touched=touched field=Field::Price input_type="number" />
                <TextInput
                    form=form
                    touched=touched
                    field=Field::StockQuantity
                    input_type="number"
                />
                <TextInput form=form touched=touched field=Field::Barcode />
                <Toggles form=form />
                {move || {
                    form.with(|form| form.error_message().map(str::to_string))
                        .map(|message| view! { <div class="error submit-error">{message}</div> })
                }}
                <div class="actions">
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || !form.with(ProductForm::can_submit)
                    >
                        "Save"
                    </button>
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| route.set(Route::Products)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
