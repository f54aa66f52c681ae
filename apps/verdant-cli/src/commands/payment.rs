//! # Payment Commands
//!
//! The mock checkout. A valid card form against a non-empty cart yields a
//! confirmation; nothing is charged.
//!
//! ## After Confirmation
//! The cart is left as-is unless `clear_cart_on_payment` is configured.
//! The payment screen has never emptied the cart itself, and whether it
//! should is a product decision, so it stays opt-in.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;
use verdant_core::payment::{self, PaymentConfirmation, PaymentForm};
use verdant_core::Intent;

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CartStore, ConfigState};

/// Payment result: the confirmation plus the cart as it stands afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub confirmation: PaymentConfirmation,
    pub cart_cleared: bool,
    pub cart: CartResponse,
}

/// Validates the form and confirms the mock payment.
pub fn submit_payment(
    store: &mut CartStore,
    config: &ConfigState,
    form: &PaymentForm,
) -> Result<PaymentResponse, ApiError> {
    let confirmation = payment::checkout(store.cart(), form, Uuid::new_v4(), Utc::now())
        .map_err(|err| {
            warn!(error = %err, "payment rejected");
            ApiError::from(err)
        })?;

    info!(
        reference = %confirmation.reference,
        amount = %confirmation.amount,
        lines = confirmation.line_count,
        "payment confirmed"
    );

    let cart_cleared = config.clear_cart_on_payment && store.dispatch(Intent::EmptyCart);

    Ok(PaymentResponse {
        confirmation,
        cart_cleared,
        cart: CartResponse::from(store.cart()),
    })
}
