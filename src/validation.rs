//! Product field validation.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

/// Longest accepted description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// Lowest accepted price.
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Editable product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Product name
    Name,

    /// Category label
    Category,

    /// Free-text description
    Description,

    /// Unit price
    Price,

    /// Units in stock
    StockQuantity,

    /// Barcode
    Barcode,
}

impl Field {
    /// Human readable field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Price => "Price",
            Self::StockQuantity => "Stock quantity",
            Self::Barcode => "Barcode",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// A rule a field value broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Left blank.
    #[error("{0} is required")]
    Required(Field),

    /// Has no alphabetic character.
    #[error("{0} must contain at least one letter")]
    MissingLetter(Field),

    /// Longer than allowed.
    #[error("{field} cannot exceed {max} characters")]
    TooLong {
        /// Offending field
        field: Field,
        /// Character limit
        max: usize,
    },

    /// Not a decimal number.
    #[error("{0} must be a number")]
    NotANumber(Field),

    /// Not an integer.
    #[error("{0} must be a whole number")]
    NotAnInteger(Field),

    /// Below the lowest accepted value.
    #[error("{field} must be at least {min}")]
    BelowMinimum {
        /// Offending field
        field: Field,
        /// Lowest accepted value
        min: Decimal,
    },

    /// Contains something other than ASCII digits.
    #[error("{0} must contain only digits")]
    NotDigits(Field),
}

impl ValidationError {
    /// Field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Required(field)
            | Self::MissingLetter(field)
            | Self::NotANumber(field)
            | Self::NotAnInteger(field)
            | Self::NotDigits(field)
            | Self::TooLong { field, .. }
            | Self::BelowMinimum { field, .. } => *field,
        }
    }
}

/// Every rule broken by a set of field values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field rule(s) violated", .0.len())]
pub struct ValidationErrors(SmallVec<[ValidationError; 4]>);

impl ValidationErrors {
    /// Whether no rule was broken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of broken rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over every broken rule.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Broken rules of one field.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().filter(move |error| error.field() == field)
    }

    /// Whether `field` broke any rule.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Keeps the value of a field check, recording its errors.
    pub fn collect<T>(&mut self, result: Result<T, ValidationErrors>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.0.extend(errors.0);
                None
            }
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = SmallVec::new();

        errors.push(error);

        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Letters are ASCII `a-z`, `A-Z` and the Latin-1 range `U+00C0..=U+00FF`.
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '\u{C0}'..='\u{FF}')
}

/// Whether `value` holds at least one letter.
pub fn contains_letter(value: &str) -> bool {
    value.chars().any(is_letter)
}

/// Required text that must contain a letter (name, category).
///
/// # Errors
///
/// Returns the broken rule when `value` is empty or has no letter.
pub fn required_text(field: Field, value: &str) -> Result<String, ValidationErrors> {
    if value.is_empty() {
        return Err(ValidationError::Required(field).into());
    }

    if !contains_letter(value) {
        return Err(ValidationError::MissingLetter(field).into());
    }

    Ok(value.to_string())
}

/// Optional description; empty text becomes `None`.
///
/// # Errors
///
/// Returns every broken rule: too long, or non-empty without a letter.
pub fn description(value: &str) -> Result<Option<String>, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if value.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.0.push(ValidationError::TooLong {
            field: Field::Description,
            max: DESCRIPTION_MAX_CHARS,
        });
    }

    if !value.is_empty() && !contains_letter(value) {
        errors.0.push(ValidationError::MissingLetter(Field::Description));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// Required price of at least [`MIN_PRICE`].
///
/// # Errors
///
/// Returns the broken rule when the price is missing, unparsable or too low.
pub fn price(value: &str) -> Result<Decimal, ValidationErrors> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required(Field::Price).into());
    }

    // Number inputs may hand over exponent forms such as `1e2`.
    let price = Decimal::from_str(value)
        .or_else(|_err| Decimal::from_scientific(value))
        .map_err(|_err| ValidationError::NotANumber(Field::Price))?;

    if price < MIN_PRICE {
        return Err(ValidationError::BelowMinimum {
            field: Field::Price,
            min: MIN_PRICE,
        }
        .into());
    }

    Ok(price)
}

/// Required, non-negative stock quantity.
///
/// # Errors
///
/// Returns the broken rule when the quantity is missing, not an integer or negative.
pub fn stock_quantity(value: &str) -> Result<i32, ValidationErrors> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required(Field::StockQuantity).into());
    }

    let quantity: i32 = value
        .parse()
        .map_err(|_err| ValidationError::NotAnInteger(Field::StockQuantity))?;

    if quantity < 0 {
        return Err(ValidationError::BelowMinimum {
            field: Field::StockQuantity,
            min: Decimal::ZERO,
        }
        .into());
    }

    Ok(quantity)
}

/// Optional digits-only barcode; empty text becomes `None`.
///
/// # Errors
///
/// Returns [`ValidationError::NotDigits`] when a non-digit is present.
pub fn barcode(value: &str) -> Result<Option<String>, ValidationErrors> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotDigits(Field::Barcode).into());
    }

    Ok((!value.is_empty()).then(|| value.to_string()))
}
