//! Product list.
//!
//! State of the paginated, filterable, sortable product list. Every intent
//! that changes the query returns a [`ListRequest`] stamped with a generation
//! number; only the response to the latest request is applied, so a slow
//! stale response never overwrites a newer one.

use rust_decimal::Decimal;
use tracing::{debug, error};

use crate::{
    products::{Product, ProductPage},
    query::{ListQuery, PAGE_SIZE, Sort, SortColumn},
    service::{ProductsService, ProductsServiceError},
};

mod delete;

pub use delete::{DeleteError, DeleteState};

/// A list query to send, tied to the state that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    generation: u64,
    query: ListQuery,
}

impl ListRequest {
    /// Generation the response must be applied with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Query to send.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Consumes the request, keeping only its query.
    pub fn into_query(self) -> ListQuery {
        self.query
    }
}

/// What applying a list response did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// The response was the latest and is now displayed.
    Applied,

    /// A newer request was issued since; the response was dropped.
    Stale,

    /// The current page no longer exists; this request fetches the last one.
    Refetch(ListRequest),
}

/// Product list state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductList {
    products: Vec<Product>,
    total_elements: u64,
    total_pages: u32,
    current_page: u32,
    page_size: u32,
    is_loading: bool,
    error_message: Option<String>,
    filter_name: String,
    filter_category: String,
    sort: Sort,
    total_stock_value: Option<Decimal>,
    delete: DeleteState,
    generation: u64,
}

impl Default for ProductList {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            current_page: 0,
            page_size: PAGE_SIZE,
            is_loading: false,
            error_message: None,
            filter_name: String::new(),
            filter_category: String::new(),
            sort: Sort::default(),
            total_stock_value: None,
            delete: DeleteState::Idle,
            generation: 0,
        }
    }
}

impl ProductList {
    /// Empty list sorted by name ascending, on the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the displayed page.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the filters, across all pages.
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Page count reported by the last applied response.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Zero-based index of the displayed page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Rows requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether the latest request is still unanswered.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed list fetch.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Name filter as typed.
    pub fn filter_name(&self) -> &str {
        &self.filter_name
    }

    /// Category filter as typed.
    pub fn filter_category(&self) -> &str {
        &self.filter_category
    }

    /// Active sort column and direction.
    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Last fetched total stock value.
    pub fn total_stock_value(&self) -> Option<Decimal> {
        self.total_stock_value
    }

    /// Query matching the current state.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.current_page,
            size: self.page_size,
            name: self.filter_name.clone(),
            category: self.filter_category.clone(),
            sort: self.sort,
        }
    }

    /// "Previous" is enabled past the first page.
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    /// "Next" is enabled before the last page.
    pub fn has_next_page(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    fn issue(&mut self) -> ListRequest {
        self.generation = self.generation.wrapping_add(1);
        self.is_loading = true;
        self.error_message = None;

        ListRequest {
            generation: self.generation,
            query: self.query(),
        }
    }

    /// Reissues the current query.
    pub fn refresh(&mut self) -> ListRequest {
        self.issue()
    }

    /// Filters by name and returns to the first page.
    pub fn set_filter_name(&mut self, value: impl Into<String>) -> ListRequest {
        self.filter_name = value.into();
        self.current_page = 0;

        self.issue()
    }

    /// Filters by category and returns to the first page.
    pub fn set_filter_category(&mut self, value: impl Into<String>) -> ListRequest {
        self.filter_category = value.into();
        self.current_page = 0;

        self.issue()
    }

    /// Column heading click.
    ///
    /// The active column flips direction and stays on the current page; any
    /// other column becomes active, ascending, from the first page.
    pub fn sort_by(&mut self, column: SortColumn) -> ListRequest {
        if self.sort.column == column {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = Sort::ascending(column);
            self.current_page = 0;
        }

        self.issue()
    }

    /// Replaces page, filters and sort at once, as when opening a saved view.
    ///
    /// The page size stays fixed. A page past the end is clamped once the
    /// response arrives.
    pub fn set_query(&mut self, query: ListQuery) -> ListRequest {
        self.current_page = query.page;
        self.filter_name = query.name;
        self.filter_category = query.category;
        self.sort = query.sort;

        self.issue()
    }

    /// Moves to the next page, unless already on the last one.
    pub fn next_page(&mut self) -> Option<ListRequest> {
        if !self.has_next_page() {
            return None;
        }

        self.current_page += 1;

        Some(self.issue())
    }

    /// Moves to the previous page, unless already on the first one.
    pub fn previous_page(&mut self) -> Option<ListRequest> {
        if !self.has_previous_page() {
            return None;
        }

        self.current_page -= 1;

        Some(self.issue())
    }

    /// Applies the response to a list request.
    ///
    /// Responses to anything but the latest request are dropped. On success
    /// the page contents and totals are replaced together; on failure the
    /// previous rows stay and an error message is set. Loading ends either way.
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<ProductPage, ProductsServiceError>,
    ) -> ListOutcome {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "dropping stale products response"
            );

            return ListOutcome::Stale;
        }

        self.is_loading = false;

        match result {
            Ok(page) => {
                self.products = page.content;
                self.total_elements = page.total_elements;
                self.total_pages = page.total_pages;
                self.error_message = None;

                if self.total_pages == 0 {
                    self.current_page = 0;
                } else if self.current_page >= self.total_pages {
                    self.current_page = self.total_pages - 1;

                    return ListOutcome::Refetch(self.issue());
                }
            }
            Err(error) => {
                error!(%error, "failed to load products");

                self.error_message = Some(format!(
                    "Failed to connect to the server. {}",
                    error.detail()
                ));
            }
        }

        ListOutcome::Applied
    }

    /// Sends `request` and applies its response, following any refetch.
    pub async fn run(&mut self, service: &dyn ProductsService, mut request: ListRequest) {
        loop {
            let generation = request.generation;
            let result = service.list_products(request.into_query()).await;

            match self.apply(generation, result) {
                ListOutcome::Refetch(next) => request = next,
                ListOutcome::Applied | ListOutcome::Stale => break,
            }
        }
    }

    /// Reloads the current page.
    pub async fn load(&mut self, service: &dyn ProductsService) {
        let request = self.refresh();

        self.run(service, request).await;
    }

    /// Stores a fetched total stock value. Failures are logged only.
    pub fn apply_total_stock_value(&mut self, result: Result<Decimal, ProductsServiceError>) {
        match result {
            Ok(value) => self.total_stock_value = Some(value),
            Err(error) => error!(%error, "failed to load total stock value"),
        }
    }

    /// Fetches the total stock value, independently of the list.
    pub async fn load_total_stock_value(&mut self, service: &dyn ProductsService) {
        let result = service.total_stock_value().await;

        self.apply_total_stock_value(result);
    }

    /// First load of the view: the current page and the total stock value.
    pub async fn init(&mut self, service: &dyn ProductsService) {
        self.load(service).await;
        self.load_total_stock_value(service).await;
    }
}
