//! # Cart Store
//!
//! Holds the canonical cart for one running shell.
//!
//! ## Ownership
//! The store is a plain owned value. The shell creates it at startup and
//! hands `&mut CartStore` to whichever command is running, so there is
//! exactly one writer and no hidden global.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Shell Action             Command                 Intent                │
//! │  ────────────             ───────                 ──────                │
//! │                                                                         │
//! │  add 3 ─────────────────► add_to_cart() ────────► Add { product }      │
//! │                                                                         │
//! │  set 3 5 / inc / dec ───► update_cart_item() ───► UpdateQuantity       │
//! │                                                                         │
//! │  remove 3 ──────────────► remove_from_cart() ───► RemoveItem           │
//! │                                                                         │
//! │  clear ─────────────────► clear_cart() ─────────► EmptyCart            │
//! │                                                                         │
//! │  cart ──────────────────► get_cart() ───────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use verdant_core::{CartState, Intent, Money};

/// The injectable cart container.
#[derive(Debug, Clone)]
pub struct CartStore {
    cart: CartState,

    /// When the cart was created or last emptied.
    created_at: DateTime<Utc>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CartStore {
            cart: CartState::new(),
            created_at: Utc::now(),
        }
    }

    /// Applies one intent and returns whether the cart changed.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        let kind = intent_kind(&intent);
        let resets = matches!(intent, Intent::EmptyCart);

        let changed = self.cart.apply(intent);
        if resets {
            self.created_at = Utc::now();
        }

        debug!(
            intent = kind,
            changed,
            lines = self.cart.item_count(),
            "cart intent dispatched"
        );
        changed
    }

    /// Current cart contents, borrowed.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Owned copy of the current cart, for readers that outlive the borrow.
    pub fn snapshot(&self) -> CartState {
        self.cart.clone()
    }

    /// When the cart was created or last emptied.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

fn intent_kind(intent: &Intent) -> &'static str {
    match intent {
        Intent::Add { .. } => "add",
        Intent::UpdateQuantity { .. } => "update_quantity",
        Intent::RemoveItem { .. } => "remove_item",
        Intent::EmptyCart => "empty_cart",
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}
