//! # Cart State
//!
//! The shopping-cart reducer: the only piece of the storefront with real
//! state-transition rules.
//!
//! ## Intents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Intent                        Effect on CartState                      │
//! │  ──────                        ───────────────────                      │
//! │                                                                         │
//! │  Add { product } ────────────► line exists?  qty += 1                  │
//! │                                otherwise     push line, qty = 1         │
//! │                                                                         │
//! │  UpdateQuantity { id, qty } ─► line exists?  qty = max(qty, 0)         │
//! │                                otherwise     no-op                      │
//! │                                                                         │
//! │  RemoveItem { id } ──────────► retain lines with other ids             │
//! │                                                                         │
//! │  EmptyCart ──────────────────► lines = []                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Line ids are pairwise distinct.
//! - Quantities are never negative. A quantity of zero is kept as a line;
//!   only `RemoveItem` deletes.
//! - Lines keep insertion order.
//! - Quantities go up to `i64::MAX`; counts and totals saturate there.
//!
//! Every intent is total: there is no error path out of the reducer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::non_negative_quantity;
use crate::ADD_TO_CART_LABEL;

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart.
///
/// Descriptive fields are a frozen copy of the product taken when the line
/// was created. Later catalog changes do not reach existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product id, unique among lines.
    pub id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Product description at time of adding (frozen).
    pub description: String,

    /// Unit price at time of adding (frozen).
    pub price: Money,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Quantity in cart, never negative.
    #[ts(type = "number")]
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line with quantity 1 from a product descriptor.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Intent
// =============================================================================

/// A named request to mutate cart state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum Intent {
    /// Add one unit of a product.
    Add { product: Product },

    /// Set a line's quantity. Negative values are clamped to zero.
    UpdateQuantity {
        id: ProductId,
        #[ts(type = "number")]
        quantity: i64,
    },

    /// Delete a line.
    RemoveItem { id: ProductId },

    /// Delete every line.
    EmptyCart,
}

// =============================================================================
// Cart State
// =============================================================================

/// Ordered cart contents.
///
/// Lines change only through [`CartState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Applies an intent in place.
    ///
    /// Returns `true` if the state changed, so hosts can skip re-rendering
    /// on no-ops.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Add { product } => {
                match self.line_mut(product.id) {
                    Some(line) => {
                        let before = line.quantity;
                        line.quantity = before.saturating_add(1);
                        line.quantity != before
                    }
                    None => {
                        self.lines.push(CartLine::from_product(&product));
                        true
                    }
                }
            }
            Intent::UpdateQuantity { id, quantity } => {
                let quantity = non_negative_quantity(quantity);
                match self.line_mut(id) {
                    Some(line) if line.quantity != quantity => {
                        line.quantity = quantity;
                        true
                    }
                    _ => false,
                }
            }
            Intent::RemoveItem { id } => {
                let before = self.lines.len();
                self.lines.retain(|line| line.id != id);
                self.lines.len() != before
            }
            Intent::EmptyCart => {
                let changed = !self.lines.is_empty();
                self.lines.clear();
                changed
            }
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Finds the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    /// Checks whether a product has a line.
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities, saturating.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of `price × quantity` over all lines, saturating.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Label for a product's add button on the shop screen.
    ///
    /// `"Add to Cart"` when the product has no line, `"Added (N)"` otherwise.
    pub fn button_label(&self, id: ProductId) -> String {
        match self.line(id) {
            Some(line) => format!("Added ({})", line.quantity),
            None => ADD_TO_CART_LABEL.to_string(),
        }
    }
}

/// Pure form of [`CartState::apply`]: `(CartState, Intent) -> CartState`.
pub fn reduce(mut state: CartState, intent: Intent) -> CartState {
    state.apply(intent);
    state
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product::new(ProductId(id), format!("Product {}", id), Money::from_cents(price_cents))
            .with_description(format!("Description {}", id))
            .with_image(format!("https://img.example/{}.png", id))
    }

    fn add(id: u32, price_cents: i64) -> Intent {
        Intent::Add {
            product: test_product(id, price_cents),
        }
    }

    fn update(id: u32, quantity: i64) -> Intent {
        Intent::UpdateQuantity {
            id: ProductId(id),
            quantity,
        }
    }

    fn remove(id: u32) -> Intent {
        Intent::RemoveItem { id: ProductId(id) }
    }

    #[test]
    fn test_add_new_product_creates_line_with_quantity_one() {
        let cart = reduce(CartState::new(), add(1, 1000));

        assert_eq!(cart.lines().len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.id, ProductId(1));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.description, "Description 1");
        assert_eq!(line.image, "https://img.example/1.png");
        assert_eq!(line.price, Money::from_cents(1000));
    }

    #[test]
    fn test_add_same_product_twice_increments() {
        let mut cart = CartState::new();
        cart.apply(add(1, 1000));
        cart.apply(add(1, 1000));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.line(ProductId(1)).map(|l| l.quantity), Some(2));
    }

    #[test]
    fn test_add_keeps_frozen_descriptor() {
        let mut cart = CartState::new();
        cart.apply(add(1, 1000));
        // Same id, new price: the existing line keeps the original copy.
        cart.apply(add(1, 2500));

        let line = cart.line(ProductId(1)).unwrap();
        assert_eq!(line.price, Money::from_cents(1000));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartState::new();
        cart.apply(add(3, 100));
        cart.apply(add(1, 100));
        cart.apply(add(2, 100));
        cart.apply(add(1, 100));
        cart.apply(remove(1));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = reduce(CartState::new(), add(1, 1000));

        assert!(cart.apply(update(1, 7)));
        assert_eq!(cart.line(ProductId(1)).unwrap().quantity, 7);

        // Same value again is reported as unchanged.
        assert!(!cart.apply(update(1, 7)));
    }

    #[test]
    fn test_update_quantity_clamps_negative_to_zero() {
        let mut cart = reduce(CartState::new(), add(1, 1000));

        assert!(cart.apply(update(1, -1)));
        let line = cart.line(ProductId(1)).unwrap();
        assert_eq!(line.quantity, 0);

        cart.apply(update(1, i64::MIN));
        assert_eq!(cart.line(ProductId(1)).unwrap().quantity, 0);
    }

    #[test]
    fn test_update_quantity_to_zero_keeps_line() {
        let mut cart = reduce(CartState::new(), add(1, 1000));
        cart.apply(update(1, 0));

        assert!(cart.contains(ProductId(1)));
        assert_eq!(cart.button_label(ProductId(1)), "Added (0)");
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let before = reduce(CartState::new(), add(1, 1000));
        let mut after = before.clone();

        assert!(!after.apply(update(99, 5)));
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let before = reduce(reduce(CartState::new(), add(1, 1000)), add(2, 500));
        let mut after = before.clone();

        assert!(!after.apply(remove(42)));
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_cart_then_mutations_stay_empty() {
        let mut cart = CartState::new();
        cart.apply(add(1, 1000));
        cart.apply(add(2, 500));

        assert!(cart.apply(Intent::EmptyCart));
        assert!(!cart.apply(remove(1)));
        assert!(!cart.apply(update(2, 4)));
        assert!(!cart.apply(Intent::EmptyCart));
        assert!(cart.is_empty());
        assert_eq!(cart, CartState::new());
    }

    #[test]
    fn test_total() {
        let mut cart = CartState::new();
        cart.apply(add(1, 1000));
        cart.apply(update(1, 2));
        cart.apply(add(2, 550));

        assert_eq!(cart.total(), Money::from_cents(2550));
        assert_eq!(cart.total().to_string(), "$25.50");
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_saturates_at_max_quantity() {
        let mut cart = reduce(CartState::new(), add(1, 1000));
        cart.apply(update(1, i64::MAX));

        assert!(!cart.apply(add(1, 1000)));
        assert_eq!(cart.line(ProductId(1)).unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_totals_at_max_quantity() {
        let mut cart = CartState::new();
        cart.apply(add(1, 1000));
        cart.apply(update(1, i64::MAX));

        assert_eq!(cart.lines()[0].line_total(), Money::from_cents(i64::MAX));
        assert_eq!(cart.total(), Money::from_cents(i64::MAX));

        // Free products still count toward the quantity sum.
        let mut cart = CartState::new();
        cart.apply(add(1, 0));
        cart.apply(update(1, i64::MAX));
        cart.apply(add(2, 0));

        assert_eq!(cart.total_quantity(), i64::MAX);
        assert!(cart.total().is_zero());
        assert_eq!(cart.button_label(ProductId(2)), "Added (1)");
    }

    #[test]
    fn test_button_label() {
        let mut cart = CartState::new();
        assert_eq!(cart.button_label(ProductId(1)), "Add to Cart");

        cart.apply(add(1, 1000));
        assert_eq!(cart.button_label(ProductId(1)), "Added (1)");

        cart.apply(add(1, 1000));
        cart.apply(add(1, 1000));
        assert_eq!(cart.button_label(ProductId(1)), "Added (3)");
        assert_eq!(cart.button_label(ProductId(2)), "Add to Cart");
    }

    #[test]
    fn test_add_update_remove_scenario_ends_empty() {
        let cart = [add(1, 1000), add(1, 1000), update(1, 5), remove(1)]
            .into_iter()
            .fold(CartState::new(), reduce);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_intent_json_shape() {
        let intent: Intent =
            serde_json::from_str(r#"{"type":"updateQuantity","id":3,"quantity":-2}"#).unwrap();
        assert_eq!(intent, update(3, -2));

        let intent: Intent = serde_json::from_str(r#"{"type":"emptyCart"}"#).unwrap();
        assert_eq!(intent, Intent::EmptyCart);
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    fn arb_quantity() -> impl Strategy<Value = i64> {
        prop_oneof![
            8 => -10i64..10,
            1 => (i64::MAX - 3)..=i64::MAX,
            1 => any::<i64>(),
        ]
    }

    fn arb_intent() -> impl Strategy<Value = Intent> {
        // A small id space so sequences revisit the same products often.
        prop_oneof![
            4 => (0u32..6, 0i64..5000).prop_map(|(id, price)| add(id, price)),
            2 => (0u32..6, arb_quantity()).prop_map(|(id, qty)| update(id, qty)),
            2 => (0u32..6).prop_map(remove),
            1 => Just(Intent::EmptyCart),
        ]
    }

    proptest! {
        /// No two lines ever share an id, and no quantity is ever negative.
        #[test]
        fn prop_ids_unique_and_quantities_non_negative(
            intents in proptest::collection::vec(arb_intent(), 0..64)
        ) {
            let mut cart = CartState::new();
            for intent in intents {
                cart.apply(intent);

                let mut ids: Vec<ProductId> = cart.lines().iter().map(|l| l.id).collect();
                let len = ids.len();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), len, "duplicate line id");
                prop_assert!(cart.lines().iter().all(|l| l.quantity >= 0));

                // Totals are defined for every reachable cart.
                prop_assert!(cart.total_quantity() >= 0);
                prop_assert!(!cart.total().is_negative());
            }
        }

        /// `apply` and `reduce` agree, and `apply` reports changes honestly.
        #[test]
        fn prop_apply_reports_change(
            intents in proptest::collection::vec(arb_intent(), 0..32)
        ) {
            let mut cart = CartState::new();
            for intent in intents {
                let before = cart.clone();
                let changed = cart.apply(intent.clone());
                prop_assert_eq!(changed, before != cart);
                prop_assert_eq!(reduce(before, intent), cart.clone());
            }
        }
    }
}
