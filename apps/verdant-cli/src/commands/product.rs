//! # Product Commands
//!
//! Handlers behind the shop screen: the catalog, each product paired with
//! the label its add button should show.

use serde::Serialize;
use tracing::debug;
use verdant_core::{Catalog, Product, ProductId};

use crate::error::ApiError;
use crate::state::CartStore;

/// A catalog entry as the shop screen renders it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub product: Product,

    /// "Add to Cart" or "Added (N)".
    pub button_label: String,
}

/// Lists every catalog product in catalog order.
pub fn list_products(catalog: &Catalog, store: &CartStore) -> Vec<ProductListing> {
    debug!(count = catalog.len(), "list_products command");

    let cart = store.cart();
    catalog
        .products()
        .iter()
        .map(|product| ProductListing {
            product: product.clone(),
            button_label: cart.button_label(product.id),
        })
        .collect()
}

/// Gets one product by id.
pub fn get_product(catalog: &Catalog, product_id: ProductId) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    Ok(catalog.require(product_id)?.clone())
}
