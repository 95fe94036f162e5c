//! Product form.
//!
//! Holds the raw text typed into the create/edit form, validates it into a
//! [`ProductInput`] and submits it through a [`ProductsService`].

use thiserror::Error;
use tracing::{error, info};

use crate::{
    products::{Product, ProductId, ProductInput},
    service::{ProductsService, ProductsServiceError},
    validation::{self, Field, ValidationErrors},
};

/// Whether the form creates a new product or edits an existing one.
///
/// Fixed when the form is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// No identifier bound
    Create,

    /// Editing the product with this id
    Edit(ProductId),
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    /// Name input
    pub name: String,
    /// Category input
    pub category: String,
    /// Description textarea
    pub description: String,
    /// Price input, parsed as a decimal on submit
    pub price: String,
    /// Stock input, parsed as an integer on submit
    pub stock_quantity: String,
    /// Barcode input
    pub barcode: String,
    /// Active checkbox
    pub active: bool,
    /// On sale checkbox
    pub on_sale: bool,
}

impl Default for ProductFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            description: String::new(),
            price: String::new(),
            stock_quantity: String::new(),
            barcode: String::new(),
            active: true,
            on_sale: false,
        }
    }
}

impl From<&Product> for ProductFields {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.normalize().to_string(),
            stock_quantity: product.stock_quantity.to_string(),
            barcode: product.barcode.clone().unwrap_or_default(),
            active: product.active,
            on_sale: product.on_sale,
        }
    }
}

impl ProductFields {
    /// Text currently typed into `field`.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::Price => &self.price,
            Field::StockQuantity => &self.stock_quantity,
            Field::Barcode => &self.barcode,
        }
    }

    /// Replaces the text of `field`.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
            Field::StockQuantity => &mut self.stock_quantity,
            Field::Barcode => &mut self.barcode,
        };

        *slot = value.into();
    }

    /// Checks every rule and builds the request body.
    ///
    /// # Errors
    ///
    /// Returns all broken rules when any field is invalid.
    pub fn validate(&self) -> Result<ProductInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = errors.collect(validation::required_text(Field::Name, &self.name));
        let category = errors.collect(validation::required_text(Field::Category, &self.category));
        let description = errors.collect(validation::description(&self.description));
        let price = errors.collect(validation::price(&self.price));
        let stock_quantity = errors.collect(validation::stock_quantity(&self.stock_quantity));
        let barcode = errors.collect(validation::barcode(&self.barcode));

        let (
            Some(name),
            Some(category),
            Some(description),
            Some(price),
            Some(stock_quantity),
            Some(barcode),
        ) = (name, category, description, price, stock_quantity, barcode)
        else {
            return Err(errors);
        };

        Ok(ProductInput {
            name,
            category,
            description,
            price,
            stock_quantity,
            barcode,
            active: self.active,
            on_sale: self.on_sale,
        })
    }
}

/// Validated request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// `POST` a new product
    Create(ProductInput),

    /// `PUT` over an existing product
    Update(ProductId, ProductInput),
}

/// Why a submission did not save the product.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Nothing was sent; the fields break these rules.
    #[error("the form has invalid fields")]
    Invalid(#[from] ValidationErrors),

    /// An earlier save has not answered yet.
    #[error("a submission is already in progress")]
    InFlight,

    /// The server refused the save.
    #[error("failed to save product")]
    Service(#[from] ProductsServiceError),
}

/// Create/edit form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    mode: FormMode,
    fields: ProductFields,
    submitting: bool,
    error_message: Option<String>,
}

impl ProductForm {
    /// Empty form for a new product.
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create)
    }

    /// Form bound to an existing product; call [`ProductForm::load`] to fill it.
    pub fn edit(id: ProductId) -> Self {
        Self::with_mode(FormMode::Edit(id))
    }

    /// Edit mode when a route supplied an id, create mode otherwise.
    pub fn for_route(id: Option<ProductId>) -> Self {
        id.map_or_else(Self::create, Self::edit)
    }

    fn with_mode(mode: FormMode) -> Self {
        Self {
            mode,
            fields: ProductFields::default(),
            submitting: false,
            error_message: None,
        }
    }

    /// Create or edit.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Id of the edited product, `None` when creating.
    pub fn product_id(&self) -> Option<ProductId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    /// Raw values as typed.
    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    /// Raw values, for input handlers.
    pub fn fields_mut(&mut self) -> &mut ProductFields {
        &mut self.fields
    }

    /// Whether a save is waiting on the server.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Message of the last failed submission.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Overwrites every field with a fetched product.
    pub fn patch(&mut self, product: &Product) {
        self.fields = ProductFields::from(product);
    }

    /// Broken rules of the current field values.
    pub fn errors(&self) -> ValidationErrors {
        self.fields.validate().err().unwrap_or_default()
    }

    /// Whether every field passes its rules.
    pub fn is_valid(&self) -> bool {
        self.fields.validate().is_ok()
    }

    /// Submit is disabled while the form is invalid or saving.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.is_valid()
    }

    /// The request the form would send.
    ///
    /// # Errors
    ///
    /// Returns all broken rules when any field is invalid.
    pub fn submission(&self) -> Result<Submission, ValidationErrors> {
        let input = self.fields.validate()?;

        Ok(match self.mode {
            FormMode::Create => Submission::Create(input),
            FormMode::Edit(id) => Submission::Update(id, input),
        })
    }

    /// Stores the outcome of fetching the edited product.
    ///
    /// A failure is logged and the fields are left as they are.
    pub fn apply_loaded(&mut self, result: Result<Product, ProductsServiceError>) {
        match result {
            Ok(product) => self.patch(&product),
            Err(error) => {
                error!(product_id = ?self.product_id(), %error, "failed to load product");
            }
        }
    }

    /// Fetches the edited product into the form. Does nothing in create mode.
    pub async fn load(&mut self, service: &dyn ProductsService) {
        let Some(id) = self.product_id() else {
            return;
        };

        let result = service.get_product(id).await;

        self.apply_loaded(result);
    }

    /// Validates and marks the form as saving.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] while a submission is pending and
    /// [`SubmitError::Invalid`] when any field is invalid.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }

        let submission = self.submission()?;

        self.submitting = true;
        self.error_message = None;

        Ok(submission)
    }

    /// Records the server's answer to a submission.
    ///
    /// On failure the error is logged and kept as the form's message; the
    /// typed values stay untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Service`] when the server rejected the request.
    pub fn finish_submit(
        &mut self,
        result: Result<Product, ProductsServiceError>,
    ) -> Result<Product, SubmitError> {
        self.submitting = false;

        match result {
            Ok(product) => {
                info!(product_id = ?product.id, "saved product");

                Ok(product)
            }
            Err(error) => {
                match self.mode {
                    FormMode::Create => error!(%error, "failed to create product"),
                    FormMode::Edit(id) => {
                        error!(product_id = %id, %error, "failed to update product");
                    }
                }

                self.error_message = Some(format!("Failed to save product. {}", error.detail()));

                Err(SubmitError::Service(error))
            }
        }
    }

    /// Validates, then creates or updates the product.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the form is invalid or the server rejected
    /// the request. Nothing is sent for an invalid form.
    pub async fn submit(&mut self, service: &dyn ProductsService) -> Result<Product, SubmitError> {
        let result = match self.begin_submit()? {
            Submission::Create(input) => service.create_product(input).await,
            Submission::Update(id, input) => service.update_product(id, input).await,
        };

        self.finish_submit(result)
    }
}
