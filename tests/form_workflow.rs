//! Integration tests for the create/edit product form

use mockall::predicate::eq;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use testresult::TestResult;

use stockroom::{
    prelude::{
        FormMode, Product, ProductFields, ProductForm, ProductId, ProductInput,
        ProductsServiceError, SubmitError,
    },
    service::MockProductsService,
};

fn fields() -> ProductFields {
    ProductFields {
        name: "Caneca Azul".to_string(),
        category: "Cozinha".to_string(),
        description: "Cerâmica".to_string(),
        price: "19.90".to_string(),
        stock_quantity: "12".to_string(),
        barcode: "7891234567895".to_string(),
        active: true,
        on_sale: true,
    }
}

fn saved(id: i64, input: ProductInput) -> Product {
    Product {
        id: Some(ProductId::new(id)),
        name: input.name,
        category: input.category,
        description: input.description,
        price: input.price,
        stock_quantity: input.stock_quantity,
        barcode: input.barcode,
        active: input.active,
        on_sale: input.on_sale,
        low_stock: false,
    }
}

#[tokio::test]
async fn create_mode_posts_a_new_product() -> TestResult {
    let mut service = MockProductsService::new();

    service
        .expect_create_product()
        .once()
        .withf(|input| {
            input.name == "Caneca Azul"
                && input.price == Decimal::new(1_990, 2)
                && input.stock_quantity == 12
                && input.description.as_deref() == Some("Cerâmica")
                && input.on_sale
        })
        .return_once(|input| Ok(saved(1, input)));

    service.expect_update_product().never();

    let mut form = ProductForm::create();

    *form.fields_mut() = fields();

    let product = form.submit(&service).await?;

    assert_eq!(product.id, Some(ProductId::new(1)));
    assert!(!form.is_submitting(), "submission finished");
    assert_eq!(form.error_message(), None);

    Ok(())
}

#[tokio::test]
async fn edit_mode_loads_then_puts_the_product() -> TestResult {
    let mut service = MockProductsService::new();

    service
        .expect_get_product()
        .once()
        .with(eq(ProductId::new(4)))
        .return_once(|id| {
            Ok(Product {
                id: Some(id),
                name: "Lamp".to_string(),
                category: "Home".to_string(),
                description: None,
                price: Decimal::new(4_500, 2),
                stock_quantity: 2,
                barcode: None,
                active: true,
                on_sale: false,
                low_stock: true,
            })
        });

    service
        .expect_update_product()
        .once()
        .withf(|id, input| {
            *id == ProductId::new(4) && input.name == "Desk Lamp" && input.barcode.is_none()
        })
        .return_once(|id, input| Ok(saved(id.get(), input)));

    service.expect_create_product().never();

    let mut form = ProductForm::for_route(Some(ProductId::new(4)));

    form.load(&service).await;

    assert_eq!(form.mode(), FormMode::Edit(ProductId::new(4)));
    assert_eq!(form.fields().name, "Lamp");
    assert_eq!(form.fields().price, "45");

    form.fields_mut().name = "Desk Lamp".to_string();

    let product = form.submit(&service).await?;

    assert_eq!(product.name, "Desk Lamp");

    Ok(())
}

#[tokio::test]
async fn create_mode_does_not_fetch() {
    let mut service = MockProductsService::new();

    service.expect_get_product().never();

    let mut form = ProductForm::create();

    form.load(&service).await;

    assert_eq!(form.fields(), &ProductFields::default());
}

#[tokio::test]
async fn failed_load_leaves_fields_untouched() {
    let mut service = MockProductsService::new();

    service
        .expect_get_product()
        .once()
        .return_once(|_| Err(ProductsServiceError::NotFound));

    let mut form = ProductForm::edit(ProductId::new(404));

    form.load(&service).await;

    assert_eq!(form.fields(), &ProductFields::default());
    assert_eq!(form.error_message(), None);
}

#[tokio::test]
async fn invalid_form_sends_nothing() {
    let mut service = MockProductsService::new();

    service.expect_create_product().never();
    service.expect_update_product().never();

    let mut form = ProductForm::create();

    *form.fields_mut() = ProductFields {
        price: "0".to_string(),
        ..fields()
    };

    let result = form.submit(&service).await;

    assert!(
        matches!(result, Err(SubmitError::Invalid(_))),
        "expected a validation failure, got {result:?}"
    );
    assert!(!form.is_submitting(), "nothing in flight");
}

#[tokio::test]
async fn rejected_save_keeps_typed_values() {
    let mut service = MockProductsService::new();

    service
        .expect_create_product()
        .once()
        .return_once(|_| Err(ProductsServiceError::Status(StatusCode::BAD_REQUEST)));

    let mut form = ProductForm::create();

    *form.fields_mut() = fields();

    let result = form.submit(&service).await;

    assert!(
        matches!(result, Err(SubmitError::Service(_))),
        "expected a service failure, got {result:?}"
    );
    assert_eq!(form.fields(), &fields());
    assert!(!form.is_submitting(), "submit re-enabled");
    assert_eq!(
        form.error_message(),
        Some("Failed to save product. (Status: 400)")
    );
}
