//! # verdant-core: Pure Business Logic for the Verdant Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart
//! reducer and everything it needs as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Verdant Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host (verdant-cli shell)                     │   │
//! │  │    Shop screen ──► Cart screen ──► Payment form                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(intent) / snapshot()          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ verdant-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ catalog │ │ payment │ │   │
//! │  │   │ Product │ │  Money  │ │ reducer │ │  JSON   │ │  form   │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, Product)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart state, intents and the reducer
//! - [`catalog`] - Read-only product catalog parsed from JSON
//! - [`payment`] - Mock payment form rules and confirmations
//! - [`validation`] - Field validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use verdant_core::cart::{CartState, Intent};
//! use verdant_core::{Money, Product, ProductId};
//!
//! let trowel = Product::new(ProductId(1), "Hand Trowel", Money::from_cents(1000));
//!
//! let mut cart = CartState::default();
//! cart.apply(Intent::Add { product: trowel.clone() });
//! cart.apply(Intent::Add { product: trowel });
//!
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.button_label(ProductId(1)), "Added (2)");
//! assert_eq!(cart.total().to_string(), "$20.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, CartState, Intent};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Label shown on a product's button while it is not in the cart.
pub const ADD_TO_CART_LABEL: &str = "Add to Cart";

/// Maximum length of a product name in the catalog.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum number of digits the payment form accepts for a card number.
pub const MAX_CARD_NUMBER_DIGITS: usize = 16;

/// Minimum number of digits for a card number.
pub const MIN_CARD_NUMBER_DIGITS: usize = 12;
