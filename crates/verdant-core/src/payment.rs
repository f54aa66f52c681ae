//! # Mock Payment
//!
//! Card-form validation and payment confirmations. No money moves: a valid
//! form against a non-empty cart simply produces a confirmation record.
//!
//! ## Checkout Flow
//! ```text
//! Cart screen ── "Buy Now" ──► Payment form
//!                                   │
//!                                   ▼
//!                        checkout(cart, form, reference, now)
//!                                   │
//!                 ┌─────────────────┼──────────────────────┐
//!                 ▼                 ▼                      ▼
//!           CoreError::EmptyCart  ValidationError   PaymentConfirmation
//! ```
//!
//! The reference and timestamp are passed in so this module stays free of
//! clock and RNG access. Whether the cart is cleared afterwards is the
//! host's decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::CartState;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{
    validate_card_holder, validate_card_number, validate_cvv, validate_expiry, ValidationResult,
};

/// The four fields of the payment form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentForm {
    pub card_holder: String,
    pub card_number: String,
    /// `MM/YY`
    pub expiry: String,
    pub cvv: String,
}

/// A form that passed validation. Holds no full card number or CVV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCard {
    pub card_holder: String,
    pub last_four: String,
    pub expiry_month: u8,
    pub expiry_year: u8,
}

impl PaymentForm {
    /// Validates every field, reporting the first failure.
    pub fn validate(&self) -> ValidationResult<ValidatedCard> {
        validate_card_holder(&self.card_holder)?;
        let digits = validate_card_number(&self.card_number)?;
        let (expiry_month, expiry_year) = validate_expiry(&self.expiry)?;
        validate_cvv(&self.cvv)?;

        Ok(ValidatedCard {
            card_holder: self.card_holder.trim().to_string(),
            last_four: digits[digits.len() - 4..].to_string(),
            expiry_month,
            expiry_year,
        })
    }
}

/// Result of a successful mock payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentConfirmation {
    /// Confirmation reference shown to the user.
    #[ts(as = "String")]
    pub reference: Uuid,

    /// Amount "charged": the cart total at the time of payment.
    pub amount: Money,

    /// Number of distinct lines paid for.
    pub line_count: usize,

    pub card_holder: String,

    /// Last four digits of the card.
    pub card_last_four: String,

    #[ts(as = "String")]
    pub confirmed_at: DateTime<Utc>,
}

/// Runs the mock checkout for the current cart.
///
/// ## Errors
/// - [`CoreError::EmptyCart`] if there is nothing to pay for: no lines, or
///   every line at quantity zero
/// - [`CoreError::Validation`] for the first invalid form field
///
/// The cart is only read.
pub fn checkout(
    cart: &CartState,
    form: &PaymentForm,
    reference: Uuid,
    now: DateTime<Utc>,
) -> CoreResult<PaymentConfirmation> {
    if cart.total_quantity() == 0 {
        return Err(CoreError::EmptyCart);
    }

    let card = form.validate()?;

    Ok(PaymentConfirmation {
        reference,
        amount: cart.total(),
        line_count: cart.item_count(),
        card_holder: card.card_holder,
        card_last_four: card.last_four,
        confirmed_at: now,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Intent;
    use crate::error::ValidationError;
    use crate::types::{Product, ProductId};

    fn valid_form() -> PaymentForm {
        PaymentForm {
            card_holder: "  Jane Gardener ".to_string(),
            card_number: "1234 5678 9012 3456".to_string(),
            expiry: "08/29".to_string(),
            cvv: "321".to_string(),
        }
    }

    fn cart_with_items() -> CartState {
        let mut cart = CartState::new();
        let trowel = Product::new(ProductId(1), "Trowel", Money::from_cents(1000));
        cart.apply(Intent::Add {
            product: trowel.clone(),
        });
        cart.apply(Intent::Add { product: trowel });
        cart.apply(Intent::Add {
            product: Product::new(ProductId(2), "Shears", Money::from_cents(550)),
        });
        cart
    }

    #[test]
    fn test_validate_form() {
        let card = valid_form().validate().unwrap();
        assert_eq!(card.card_holder, "Jane Gardener");
        assert_eq!(card.last_four, "3456");
        assert_eq!((card.expiry_month, card.expiry_year), (8, 29));
    }

    #[test]
    fn test_validate_reports_missing_field() {
        let form = PaymentForm {
            cvv: String::new(),
            ..valid_form()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required {
                field: "cvv".to_string()
            })
        );

        assert!(PaymentForm::default().validate().is_err());
    }

    #[test]
    fn test_checkout_confirms_cart_total() {
        let cart = cart_with_items();
        let reference = Uuid::nil();
        let now = Utc::now();

        let confirmation = checkout(&cart, &valid_form(), reference, now).unwrap();

        assert_eq!(confirmation.amount, Money::from_cents(2550));
        assert_eq!(confirmation.line_count, 2);
        assert_eq!(confirmation.card_last_four, "3456");
        assert_eq!(confirmation.reference, reference);
        assert_eq!(confirmation.confirmed_at, now);
        // Checkout never touches the cart.
        assert_eq!(cart, cart_with_items());
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let err = checkout(&CartState::new(), &valid_form(), Uuid::nil(), Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_checkout_rejects_all_zero_quantities() {
        let mut cart = cart_with_items();
        let ids: Vec<ProductId> = cart.lines().iter().map(|line| line.id).collect();
        for id in ids {
            cart.apply(Intent::UpdateQuantity { id, quantity: 0 });
        }
        assert_eq!(cart.item_count(), 2);

        let err = checkout(&cart, &valid_form(), Uuid::nil(), Utc::now()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_checkout_rejects_bad_expiry() {
        let form = PaymentForm {
            expiry: "2029-08".to_string(),
            ..valid_form()
        };
        let err = checkout(&cart_with_items(), &form, Uuid::nil(), Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }
}
