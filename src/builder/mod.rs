//! Record builder: turns raw form input into a [`Product`].
//!
//! Only the two numeric fields are validated. Text fields are copied verbatim,
//! empty strings included, and no range checks are made, so negative prices
//! and quantities go through.

mod error;

pub use error::*;

use tracing::{debug, instrument};

use crate::domain::{Product, ProductForm};

/// Parses and validates a form.
///
/// Price is checked before quantity, so input with both fields malformed
/// reports the price. Nothing is written anywhere.
#[instrument(level = "debug", skip(form), fields(barcode = %form.barcode))]
pub fn build(form: &ProductForm) -> Result<Product, ValidationError> {
    let price = parse_price(&form.price)?;
    let quantity = parse_quantity(&form.quantity)?;

    debug!(price, quantity, "Form input parsed");

    Ok(Product::new(
        form.barcode.clone(),
        form.name.clone(),
        form.category.clone(),
        price,
        quantity,
        form.manufacturer.clone(),
        form.description.clone(),
    ))
}

/// Decimal with optional sign, fraction and exponent. Surrounding whitespace
/// is ignored; `NaN` and infinities are not prices.
fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ValidationError::price(raw)),
    }
}

/// Base-10 `i32` with optional sign, no whitespace.
fn parse_quantity(raw: &str) -> Result<i32, ValidationError> {
    raw.parse::<i32>().map_err(|_| ValidationError::quantity(raw))
}
