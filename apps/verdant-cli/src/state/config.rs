//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`)
//! 2. Environment variables (`VERDANT_*`)
//! 3. Defaults (this file)
//!
//! Read-only after initialization.

use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;
use verdant_core::Money;

/// Application configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the shell banner)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Empty the cart after a confirmed payment.
    /// Off by default: the payment screen has never cleared the cart.
    pub clear_cart_on_payment: bool,

    /// Catalog file override. `None` uses the bundled catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Store: "Verdant Garden Supply"
    /// - Currency: $
    /// - Cart kept after payment
    /// - Bundled catalog
    fn default() -> Self {
        ConfigState {
            store_name: "Verdant Garden Supply".to_string(),
            currency_symbol: "$".to_string(),
            clear_cart_on_payment: false,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VERDANT_STORE_NAME`: Override store name
    /// - `VERDANT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `VERDANT_CLEAR_CART_ON_PAYMENT`: `true` / `false`
    /// - `VERDANT_CATALOG`: Path to a catalog JSON file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("VERDANT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("VERDANT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(flag) = lookup("VERDANT_CLEAR_CART_ON_PAYMENT") {
            match parse_flag(&flag) {
                Some(value) => config.clear_cart_on_payment = value,
                None => warn!(
                    value = %flag,
                    "ignoring VERDANT_CLEAR_CART_ON_PAYMENT, expected true or false"
                ),
            }
        }

        if let Some(path) = lookup("VERDANT_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }

    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use verdant_cli::state::ConfigState;
    /// use verdant_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(2550)), "$25.50");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
