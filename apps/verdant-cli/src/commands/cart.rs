//! # Cart Commands
//!
//! Handlers behind the cart screen.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Payment  │────►│Confirmed │       │
//! │  │  Cart    │     │          │     │  Form    │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                             │ cart kept   │
//! │       │           update_cart_item                        │ unless      │
//! │       │           remove_from_cart                        │ configured  │
//! │       │                │                                  │             │
//! │       └─── clear_cart ─┘◄─────────────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use verdant_core::{CartLine, CartState, Catalog, Intent, ProductId};

use crate::error::ApiError;
use crate::state::{CartStore, CartTotals};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        CartResponse {
            items: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(store.cart())
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Unknown product id: `NOT_FOUND`, cart untouched
/// - Already in cart: quantity + 1
/// - Not in cart: new line with the catalog's current descriptor
pub fn add_to_cart(
    catalog: &Catalog,
    store: &mut CartStore,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.require(product_id)?.clone();
    store.dispatch(Intent::Add { product });

    Ok(CartResponse::from(store.cart()))
}

/// Sets the quantity of a line.
///
/// ## Behavior
/// - Negative quantity: stored as 0
/// - Quantity 0: line stays, shown as `x0`
/// - Product not in cart: no-op
pub fn update_cart_item(store: &mut CartStore, product_id: ProductId, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    store.dispatch(Intent::UpdateQuantity {
        id: product_id,
        quantity,
    });

    CartResponse::from(store.cart())
}

/// The cart screen's `+` button.
pub fn increment_item(store: &mut CartStore, product_id: ProductId) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "increment_item command");

    let current = current_quantity(store, product_id)?;
    Ok(update_cart_item(
        store,
        product_id,
        current.saturating_add(1),
    ))
}

/// The cart screen's `-` button.
///
/// Going below zero is skipped before anything is dispatched.
pub fn decrement_item(store: &mut CartStore, product_id: ProductId) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "decrement_item command");

    let next = current_quantity(store, product_id)? - 1;
    if next < 0 {
        debug!(product_id = %product_id, "quantity already zero, decrement skipped");
        return Ok(CartResponse::from(store.cart()));
    }

    Ok(update_cart_item(store, product_id, next))
}

fn current_quantity(store: &CartStore, product_id: ProductId) -> Result<i64, ApiError> {
    store
        .cart()
        .line(product_id)
        .map(|line| line.quantity)
        .ok_or_else(|| ApiError::cart(format!("Product {} is not in the cart", product_id)))
}

/// Removes a line. Absent ids are a no-op.
pub fn remove_from_cart(store: &mut CartStore, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    store.dispatch(Intent::RemoveItem { id: product_id });
    CartResponse::from(store.cart())
}

/// Clears all items from the cart.
pub fn clear_cart(store: &mut CartStore) -> CartResponse {
    debug!("clear_cart command");

    store.dispatch(Intent::EmptyCart);
    CartResponse::from(store.cart())
}
