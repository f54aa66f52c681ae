//! # Validation Module
//!
//! Input validation utilities for the catalog loader, the cart and the
//! payment form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell parser (verdant-cli)                                   │
//! │  ├── Argument count, integer parsing                                   │
//! │  └── Immediate inline feedback                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Catalog records (name, price)                                     │
//! │  ├── Cart quantities (clamped, never rejected)                         │
//! │  └── Payment form fields                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CARD_NUMBER_DIGITS, MAX_PRODUCT_NAME_LEN, MIN_CARD_NUMBER_DIGITS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
///
/// ```rust
/// use verdant_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Hand Trowel").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Cart Quantities
// =============================================================================

/// Floors a requested quantity at zero.
///
/// Cart updates never fail: a negative request is stored as 0 and the line
/// stays in the cart.
#[inline]
pub fn non_negative_quantity(quantity: i64) -> i64 {
    quantity.max(0)
}

// =============================================================================
// Payment Form Validators
// =============================================================================

/// Validates the card holder name.
pub fn validate_card_holder(holder: &str) -> ValidationResult<()> {
    if holder.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "card holder".to_string(),
        });
    }
    Ok(())
}

/// Validates a card number and returns it with spaces removed.
///
/// ## Rules
/// - Required
/// - Digits only (spaces are ignored)
/// - 12 to 16 digits
///
/// ```rust
/// use verdant_core::validation::validate_card_number;
///
/// assert_eq!(validate_card_number("4242 4242 4242 4242").unwrap(), "4242424242424242");
/// assert!(validate_card_number("4242-4242").is_err());
/// ```
pub fn validate_card_number(number: &str) -> ValidationResult<String> {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: "card number".to_string(),
        });
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    if digits.len() < MIN_CARD_NUMBER_DIGITS || digits.len() > MAX_CARD_NUMBER_DIGITS {
        return Err(ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: format!(
                "must be {} to {} digits",
                MIN_CARD_NUMBER_DIGITS, MAX_CARD_NUMBER_DIGITS
            ),
        });
    }

    Ok(digits)
}

/// Validates an expiry date in `MM/YY` form and returns `(month, year)`.
///
/// Only the format is checked. Whether the card has expired depends on the
/// current date, which the core never reads.
pub fn validate_expiry(expiry: &str) -> ValidationResult<(u8, u8)> {
    let expiry = expiry.trim();

    if expiry.is_empty() {
        return Err(ValidationError::Required {
            field: "expiry date".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "expiry date".to_string(),
        reason: "must be MM/YY".to_string(),
    };

    let (month, year) = expiry.split_once('/').ok_or_else(invalid)?;
    let is_two_digits = |s: &str| s.len() == 2 && s.chars().all(|c| c.is_ascii_digit());
    if !is_two_digits(month) || !is_two_digits(year) {
        return Err(invalid());
    }

    let month: u8 = month.parse().map_err(|_| invalid())?;
    let year: u8 = year.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(ValidationError::OutOfRange {
            field: "expiry month".to_string(),
            min: 1,
            max: 12,
        });
    }

    Ok((month, year))
}

/// Validates a CVV: 3 or 4 digits.
pub fn validate_cvv(cvv: &str) -> ValidationResult<()> {
    let cvv = cvv.trim();

    if cvv.is_empty() {
        return Err(ValidationError::Required {
            field: "cvv".to_string(),
        });
    }

    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "cvv".to_string(),
            reason: "must be 3 or 4 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
