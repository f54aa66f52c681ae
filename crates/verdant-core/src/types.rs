//! # Domain Types
//!
//! Catalog-side types shared by the cart and the host.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │        │    CartLine     │  (cart module)         │
//! │  │  ─────────────  │  Add   │  ─────────────  │                        │
//! │  │  id             │ ─────► │  id             │                        │
//! │  │  name           │ copied │  name           │                        │
//! │  │  description    │  once  │  description    │                        │
//! │  │  price (cents)  │        │  price (cents)  │                        │
//! │  │  image          │        │  image          │                        │
//! │  └─────────────────┘        │  quantity       │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable product identifier, as assigned by the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the shop.
///
/// Callers pass the full descriptor when adding to the cart; the cart never
/// looks products up on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Short description shown on the product card.
    #[serde(default)]
    pub description: String,

    /// Unit price in cents.
    pub price: Money,

    /// Image URL.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Creates a product with an empty description and image.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
