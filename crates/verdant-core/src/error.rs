//! # Error Types
//!
//! Domain-specific error types for verdant-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  verdant-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  verdant-cli errors (app)                                              │
//! │  ├── ApiError         - What the shell shows (code + message)          │
//! │  └── AppError         - Startup / terminal I/O failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Shell output           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart reducer itself never fails; these errors come from the catalog
//! loader and the payment form.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Catalog document could not be parsed.
    ///
    /// ## When This Occurs
    /// - Malformed JSON
    /// - Missing `gardening_items` key
    /// - A record missing one of `id`, `name`, `price`
    #[error("Catalog could not be parsed: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty, nothing to pay for")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. expiry not MM/YY).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two catalog records with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
