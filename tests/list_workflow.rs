//! Integration tests for the product list workflow

use mockall::{Sequence, predicate::eq};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use testresult::TestResult;

use stockroom::{
    list::{DeleteError, ProductList},
    products::{Product, ProductId, ProductPage},
    query::{Sort, SortColumn},
    service::{MockProductsService, ProductsServiceError},
};

fn product(id: i64, name: &str) -> Product {
    Product {
        id: Some(ProductId::new(id)),
        name: name.to_string(),
        category: "Kitchen".to_string(),
        description: None,
        price: Decimal::new(1_000, 2),
        stock_quantity: 10,
        barcode: None,
        active: true,
        on_sale: false,
        low_stock: false,
    }
}

fn page(content: Vec<Product>, total_elements: u64, total_pages: u32, number: u32) -> ProductPage {
    ProductPage {
        content,
        total_elements,
        total_pages,
        size: 10,
        number,
    }
}

fn transport_error() -> Result<ProductsServiceError, &'static str> {
    reqwest::Client::new()
        .get("http://")
        .build()
        .err()
        .map(ProductsServiceError::Transport)
        .ok_or("expected an unusable url to fail")
}

#[tokio::test]
async fn init_loads_first_page_and_stock_value() {
    let mut service = MockProductsService::new();

    service
        .expect_list_products()
        .once()
        .withf(|query| {
            query.page == 0
                && query.size == 10
                && query.sort == Sort::default()
                && query.name.is_empty()
                && query.category.is_empty()
        })
        .return_once(|_| Ok(page(vec![product(1, "Caneca")], 1, 1, 0)));

    service
        .expect_total_stock_value()
        .once()
        .return_once(|| Ok(Decimal::new(10_000, 2)));

    service.expect_delete_product().never();

    let mut list = ProductList::new();

    list.init(&service).await;

    assert_eq!(list.products().len(), 1);
    assert_eq!(list.total_stock_value(), Some(Decimal::new(10_000, 2)));
    assert!(!list.is_loading(), "loading finished");
    assert_eq!(list.error_message(), None);
}

#[tokio::test]
async fn unreachable_server_reports_connection_failure() -> TestResult {
    let error = transport_error()?;
    let mut service = MockProductsService::new();

    service
        .expect_list_products()
        .once()
        .return_once(move |_| Err(error));

    let mut list = ProductList::new();

    list.load(&service).await;

    assert!(!list.is_loading(), "loading must not stay stuck on error");
    assert!(list.products().is_empty(), "first load leaves the list empty");
    assert!(
        list.error_message()
            .is_some_and(|message| message.contains("Connection/CORS")),
        "expected a connectivity message, got {:?}",
        list.error_message()
    );

    Ok(())
}

#[tokio::test]
async fn rejected_request_reports_status() {
    let mut service = MockProductsService::new();

    service
        .expect_list_products()
        .once()
        .return_once(|_| Err(ProductsServiceError::Status(StatusCode::BAD_GATEWAY)));

    let mut list = ProductList::new();

    list.load(&service).await;

    assert_eq!(
        list.error_message(),
        Some("Failed to connect to the server. (Status: 502)")
    );
}

#[tokio::test]
async fn stock_value_failure_does_not_block_the_list() {
    let mut service = MockProductsService::new();

    service
        .expect_list_products()
        .once()
        .return_once(|_| Ok(page(vec![product(1, "Caneca")], 1, 1, 0)));

    service
        .expect_total_stock_value()
        .once()
        .return_once(|| Err(ProductsServiceError::Status(StatusCode::INTERNAL_SERVER_ERROR)));

    let mut list = ProductList::new();

    list.init(&service).await;

    assert_eq!(list.products().len(), 1);
    assert_eq!(list.error_message(), None);
    assert_eq!(list.total_stock_value(), None);
}

#[tokio::test]
async fn filters_and_sort_are_sent_with_the_query() {
    let mut service = MockProductsService::new();

    service
        .expect_list_products()
        .once()
        .withf(|query| {
            query.name == "mug"
                && query.category == "Kitchen"
                && query.page == 0
                && query.sort == Sort::ascending(SortColumn::Price)
        })
        .return_once(|_| Ok(page(Vec::new(), 0, 0, 0)));

    let mut list = ProductList::new();

    let _name = list.set_filter_name("mug");
    let _category = list.set_filter_category("Kitchen");
    let request = list.sort_by(SortColumn::Price);

    list.run(&service, request).await;

    assert!(!list.is_loading(), "latest request applied");
}

#[tokio::test]
async fn paging_through_twenty_five_products() -> TestResult {
    let mut service = MockProductsService::new();
    let mut sequence = Sequence::new();

    for number in 0..3_u32 {
        service
            .expect_list_products()
            .once()
            .in_sequence(&mut sequence)
            .withf(move |query| query.page == number)
            .return_once(move |_| Ok(page(Vec::new(), 25, 3, number)));
    }

    let mut list = ProductList::new();

    list.load(&service).await;

    assert_eq!(list.total_pages(), 3);
    assert!(!list.has_previous_page(), "previous disabled on page 0");
    assert!(list.has_next_page(), "next enabled on page 0");

    let request = list.next_page().ok_or("page 1 should be reachable")?;
    list.run(&service, request).await;

    assert!(list.has_previous_page(), "previous enabled on page 1");
    assert!(list.has_next_page(), "next enabled on page 1");

    let request = list.next_page().ok_or("page 2 should be reachable")?;
    list.run(&service, request).await;

    assert!(list.has_previous_page(), "previous enabled on page 2");
    assert!(!list.has_next_page(), "next disabled on page 2");
    assert_eq!(list.next_page(), None);

    Ok(())
}

#[tokio::test]
async fn confirming_delete_reloads_list_and_stock_value() -> TestResult {
    let mut service = MockProductsService::new();
    let mut sequence = Sequence::new();

    service
        .expect_delete_product()
        .once()
        .in_sequence(&mut sequence)
        .with(eq(ProductId::new(7)))
        .return_once(|_| Ok(()));

    service
        .expect_list_products()
        .once()
        .in_sequence(&mut sequence)
        .return_once(|_| Ok(page(Vec::new(), 0, 0, 0)));

    service
        .expect_total_stock_value()
        .once()
        .in_sequence(&mut sequence)
        .return_once(|| Ok(Decimal::ZERO));

    let mut list = ProductList::new();

    list.request_delete(ProductId::new(7));

    let deleted = list.confirm_delete(&service).await?;

    assert_eq!(deleted, ProductId::new(7));
    assert!(!list.show_delete_modal(), "modal closed");
    assert_eq!(list.total_stock_value(), Some(Decimal::ZERO));

    Ok(())
}

#[tokio::test]
async fn canceling_delete_calls_nothing() {
    let mut service = MockProductsService::new();

    service.expect_delete_product().never();
    service.expect_list_products().never();
    service.expect_total_stock_value().never();

    let mut list = ProductList::new();

    list.request_delete(ProductId::new(7));
    list.cancel_delete();

    let result = list.confirm_delete(&service).await;

    assert!(
        matches!(result, Err(DeleteError::NotPending)),
        "nothing left to confirm, got {result:?}"
    );
    assert!(!list.show_delete_modal(), "modal hidden");
}

#[tokio::test]
async fn confirming_again_while_deleting_sends_nothing() {
    let mut service = MockProductsService::new();

    service.expect_delete_product().never();
    service.expect_list_products().never();

    let mut list = ProductList::new();

    list.request_delete(ProductId::new(7));

    assert_eq!(list.begin_delete(), Some(ProductId::new(7)));

    let result = list.confirm_delete(&service).await;

    assert!(
        matches!(result, Err(DeleteError::NotPending)),
        "first delete still in flight, got {result:?}"
    );
    assert!(list.is_deleting(), "first delete untouched");
}

#[tokio::test]
async fn failed_delete_alerts_without_reloading() {
    let mut service = MockProductsService::new();

    service
        .expect_delete_product()
        .once()
        .return_once(|_| Err(ProductsServiceError::Status(StatusCode::CONFLICT)));

    service.expect_list_products().never();
    service.expect_total_stock_value().never();

    let mut list = ProductList::new();

    list.request_delete(ProductId::new(7));

    let result = list.confirm_delete(&service).await;

    assert!(
        matches!(result, Err(DeleteError::Failed(_))),
        "expected a failed delete, got {result:?}"
    );
    assert!(!list.show_delete_modal(), "modal closed after failure");
    assert!(!list.is_loading(), "no reload issued");
}

#[tokio::test]
async fn deleting_the_last_row_of_the_last_page_moves_back_a_page() -> TestResult {
    let mut service = MockProductsService::new();
    let mut sequence = Sequence::new();

    service
        .expect_list_products()
        .once()
        .in_sequence(&mut sequence)
        .withf(|query| query.page == 0)
        .return_once(|_| Ok(page(Vec::new(), 11, 2, 0)));

    service
        .expect_list_products()
        .once()
        .in_sequence(&mut sequence)
        .withf(|query| query.page == 1)
        .return_once(|_| Ok(page(vec![product(11, "Zebra")], 11, 2, 1)));

    service
        .expect_delete_product()
        .once()
        .in_sequence(&mut sequence)
        .return_once(|_| Ok(()));

    service
        .expect_list_products()
        .once()
        .in_sequence(&mut sequence)
        .withf(|query| query.page == 1)
        .return_once(|_| Ok(page(Vec::new(), 10, 1, 1)));

    service
        .expect_list_products()
        .once()
        .in_sequence(&mut sequence)
        .withf(|query| query.page == 0)
        .return_once(|_| Ok(page(vec![product(1, "Caneca")], 10, 1, 0)));

    service
        .expect_total_stock_value()
        .once()
        .in_sequence(&mut sequence)
        .return_once(|| Ok(Decimal::ONE));

    let mut list = ProductList::new();

    list.load(&service).await;

    let request = list.next_page().ok_or("page 1 should be reachable")?;
    list.run(&service, request).await;

    list.request_delete(ProductId::new(11));
    list.confirm_delete(&service).await?;

    assert_eq!(list.current_page(), 0);
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.products().len(), 1);
    assert!(!list.is_loading(), "refetch applied");

    Ok(())
}
