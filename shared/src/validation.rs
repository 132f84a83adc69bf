//! Validation utilities for the Farm Shop Ledger
//!
//! Used both as `validator` custom functions on the input models and
//! directly by clients before submitting a form.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Maximum dealer name length, in characters
pub const MAX_DEALER_NAME_LEN: usize = 100;

/// Upper bound for a batch weight (kg) or unit price. Keeps every stored
/// total, and any sum of totals the ledger can hold, inside `Decimal` range.
pub const MAX_BATCH_QUANTITY: i64 = 1_000_000;

/// Weights and prices may be zero, never negative, and at most
/// [`MAX_BATCH_QUANTITY`]
pub fn validate_batch_quantity(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut error = ValidationError::new("non_negative");
        error.message = Some(Cow::Borrowed("Value cannot be negative"));
        return Err(error);
    }
    if *value > Decimal::from(MAX_BATCH_QUANTITY) {
        let mut error = ValidationError::new("max_quantity");
        error.message = Some(Cow::Borrowed("Value cannot exceed 1,000,000"));
        return Err(error);
    }
    Ok(())
}

/// Client-side form check: a batch needs a positive weight and price
pub fn validate_batch_amounts(weight_kg: Decimal, price_per_kg: Decimal) -> Result<(), &'static str> {
    if weight_kg <= Decimal::ZERO || price_per_kg <= Decimal::ZERO {
        return Err("Please enter valid weight and price.");
    }
    Ok(())
}

/// Validate a dealer name after trimming
pub fn validate_dealer_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Dealer name cannot be empty");
    }
    if trimmed.chars().count() > MAX_DEALER_NAME_LEN {
        return Err("Dealer name must be at most 100 characters");
    }
    Ok(())
}
