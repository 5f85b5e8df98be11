//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use shared::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: item, category, user
pub const MAX_NAME_LEN: usize = 200;

/// Item descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Maximum allowed price per item
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i64 = 9999;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

/// Price must be finite, non-negative and at most [`MAX_PRICE`]
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(AppError::new(ErrorCode::InvalidPrice).with_detail("price", price));
    }
    Ok(())
}

/// Quantity must be within 1..=[`MAX_QUANTITY`]
pub fn validate_quantity(quantity: i64) -> Result<(), AppError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(AppError::new(ErrorCode::InvalidQuantity).with_detail("quantity", quantity));
    }
    Ok(())
}
