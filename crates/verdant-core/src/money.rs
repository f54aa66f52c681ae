//! # Money Module
//!
//! Provides the `Money` type for handling monetary values.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices:                                                  │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The catalog's decimal prices are converted to cents ONCE, when the  │
//! │    catalog is parsed. Every total after that is exact integer math.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use verdant_core::money::Money;
//!
//! let price = Money::from_cents(550); // $5.50
//! let line = price.multiply_quantity(3);
//! assert_eq!(line.to_string(), "$16.50");
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays closed; negative prices are
///   rejected by validation, not by the type
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as cents**: `Money(1099)` is `1099` on the wire
/// - **Saturating arithmetic**: sums and line totals clamp at the i64
///   bounds instead of overflowing, so any stored quantity has a total
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal dollar amount (as found in catalog JSON) to cents,
    /// rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities and values outside the i64 cent
    /// range. This is the only float entry point and is used solely at the
    /// catalog boundary.
    ///
    /// ```rust
    /// use verdant_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_dollars(5.5), Some(Money::from_cents(550)));
    /// assert_eq!(Money::from_decimal_dollars(19.99), Some(Money::from_cents(1999)));
    /// assert_eq!(Money::from_decimal_dollars(f64::NAN), None);
    /// ```
    pub fn from_decimal_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() {
            return None;
        }
        let cents = (dollars * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Pruning Shears $5.50
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $16.50
    /// ```
    ///
    /// Saturates at the i64 cent bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

/// Deserializes a decimal dollar amount (e.g. `5.5`) into [`Money`].
///
/// Used with `#[serde(deserialize_with = "...")]` on catalog records.
pub fn deserialize_dollars<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let dollars = f64::deserialize(deserializer)?;
    Money::from_decimal_dollars(dollars).ok_or_else(|| {
        serde::de::Error::custom(format!("price {dollars} is not a representable amount"))
    })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, the format the cart screen uses for totals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Saturating addition.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
