//! # Error Types
//!
//! Errors surfaced by the shell.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  Command handler                                                        │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── CoreError::ProductNotFound ──► NOT_FOUND ──┐               │
//! │         ├── CoreError::Validation ───────► VALIDATION ─┤               │
//! │         ├── CoreError::EmptyCart ────────► PAYMENT ────┼──► inline     │
//! │         └── bad shell input ─────────────► VALIDATION ─┘    message,   │
//! │                                                              loop      │
//! │  Startup / terminal I/O                                      continues │
//! │  Result<T, AppError> ──────────────────────────────► process exits     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` is recoverable and shown inline. `AppError` ends the process.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use verdant_core::CoreError;

/// Error returned from command handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Payment could not be confirmed
    PaymentError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::EmptyCart => {
                ApiError::new(ErrorCode::PaymentError, CoreError::EmptyCart.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::CatalogParse(e) => {
                tracing::error!("catalog parse error reached a command: {}", e);
                ApiError::internal("Catalog is unavailable")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Fatal errors: startup and terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog file could not be read.
    #[error("Could not read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog was read but is invalid.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CoreError),

    /// Reading commands or writing output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::ProductNotFound("9".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 9");

        let err = ApiError::from(CoreError::EmptyCart);
        assert_eq!(err.code, ErrorCode::PaymentError);

        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "cvv".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "cvv is required");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Product", "3")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 3");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::validation("quantity must be a whole number").to_string(),
            "[ValidationError] quantity must be a whole number"
        );
    }
}
