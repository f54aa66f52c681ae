//! # Product Catalog
//!
//! Read-only product list supplied at startup.
//!
//! ## Document Shape
//! ```json
//! {
//!   "gardening_items": [
//!     { "id": 1, "name": "Hand Trowel", "description": "...",
//!       "price": 12.99, "image": "https://..." }
//!   ]
//! }
//! ```
//!
//! Prices arrive as decimal dollars and are converted to cents here, once.
//! Parsing takes a `&str`; reading the file is the host's job.

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{deserialize_dollars, Money};
use crate::types::{Product, ProductId};
use crate::validation::{validate_price, validate_product_name};

/// Raw catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    gardening_items: Vec<CatalogRecord>,
}

/// One record as written in the JSON file.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(deserialize_with = "deserialize_dollars")]
    price: Money,
    #[serde(default)]
    image: String,
}

impl From<CatalogRecord> for Product {
    fn from(record: CatalogRecord) -> Self {
        Product {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            image: record.image,
        }
    }
}

/// The product catalog, in document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    ///
    /// ## Errors
    /// - [`CoreError::CatalogParse`] for malformed JSON or missing fields
    /// - [`CoreError::Validation`] for an empty/overlong name, a negative
    ///   price, or a repeated id
    ///
    /// ```rust
    /// use verdant_core::{Catalog, ProductId};
    ///
    /// let catalog = Catalog::from_json(r#"{"gardening_items": [
    ///     {"id": 1, "name": "Rake", "price": 8.5}
    /// ]}"#).unwrap();
    ///
    /// assert_eq!(catalog.get(ProductId(1)).unwrap().price.cents(), 850);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let products = document
            .gardening_items
            .into_iter()
            .map(Product::from)
            .collect();
        Catalog::from_products(products)
    }

    /// Builds a catalog from already-typed products, applying the same
    /// validation as [`Catalog::from_json`].
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            validate_product_name(&product.name)?;
            validate_price(product.price)?;
            if !seen.insert(product.id) {
                return Err(CoreError::Validation(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }));
            }
        }
        Ok(Catalog { products })
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Looks up a product, failing with [`CoreError::ProductNotFound`].
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Products in document order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
