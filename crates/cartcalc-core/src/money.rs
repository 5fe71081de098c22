//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price, discount, surcharge and total is an i64 of cents.      │
//! │    Percentages are basis points, applied with integer rounding.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartcalc_core::money::Money;
//! use cartcalc_core::types::Rate;
//!
//! let line = Money::from_cents(300_000); // $3,000.00
//! let bulk = line.percent_of(Rate::from_bps(1500)); // 15%
//! assert_eq!(bulk.cents(), 45_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Plain arithmetic stays simple; the engine only ever
///   produces non-negative amounts from validated inputs
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde transparent**: Serializes as a bare integer
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  CartLineItem.unit_price ──► line value ──► bulk discount              │
/// │                                   │                                     │
/// │                                   ▼                                     │
/// │  original total ──► loyalty ──► cap ──► final total ──► shipping       │
/// │                                                             │           │
/// │                                                             ▼           │
/// │                                                        grand total      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cartcalc_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use cartcalc_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Checked addition.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Checked subtraction.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Takes a percentage of this amount, rounded to the nearest cent.
    ///
    /// ## Rounding
    /// Round half away from zero, in integer math:
    /// `(|amount| × bps + 5000) / 10000`, sign restored afterwards.
    /// For the non-negative amounts the engine works with this is plain
    /// round-half-up: 0.5 cent always goes up.
    ///
    /// ```text
    /// 5000 cents × 15%  =  750.00  →  750
    /// 3333 cents × 15%  =  499.95  →  500
    ///  333 cents × 15%  =   49.95  →   50
    ///   10 cents ×  5%  =    0.50  →    1
    /// ```
    ///
    /// The intermediate product is computed in i128, and a rate of at most
    /// 100% can never produce a result larger than the input, so this cannot
    /// overflow for rates the policy accepts.
    ///
    /// ## Example
    /// ```rust
    /// use cartcalc_core::money::Money;
    /// use cartcalc_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(5000);
    /// assert_eq!(subtotal.percent_of(Rate::from_bps(1500)).cents(), 750);
    /// ```
    pub fn percent_of(&self, rate: Rate) -> Money {
        let magnitude = (self.0 as i128).abs();
        let rounded = (magnitude * rate.bps() as i128 + 5000) / 10000;
        let signed = if self.0 < 0 { -rounded } else { rounded };
        Money::from_cents(signed as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
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

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(255_000)), "$2550.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(10).checked_sub(Money::from_cents(4)),
            Some(Money::from_cents(6))
        );
    }

    #[test]
    fn test_percent_of_exact() {
        let amount = Money::from_cents(300_000);
        assert_eq!(amount.percent_of(Rate::from_bps(1500)).cents(), 45_000);
        assert_eq!(amount.percent_of(Rate::from_bps(3000)).cents(), 90_000);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // 10 × 5% = 0.5 → 1
        assert_eq!(Money::from_cents(10).percent_of(Rate::from_bps(500)).cents(), 1);
        // 9 × 5% = 0.45 → 0
        assert_eq!(Money::from_cents(9).percent_of(Rate::from_bps(500)).cents(), 0);
        // 3333 × 15% = 499.95 → 500
        assert_eq!(Money::from_cents(3333).percent_of(Rate::from_bps(1500)).cents(), 500);
        // 1001 × 15% = 150.15 → 150
        assert_eq!(Money::from_cents(1001).percent_of(Rate::from_bps(1500)).cents(), 150);
    }

    #[test]
    fn test_percent_of_negative_rounds_away_from_zero() {
        assert_eq!(Money::from_cents(-10).percent_of(Rate::from_bps(500)).cents(), -1);
    }

    #[test]
    fn test_percent_of_large_amount_does_not_overflow() {
        let amount = Money::from_cents(i64::MAX);
        let full = amount.percent_of(Rate::from_bps(10_000));
        assert_eq!(full, amount);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(Money::default(), zero);

        assert!(!Money::from_cents(100).is_negative());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(1450)).unwrap();
        assert_eq!(json, "1450");
        let back: Money = serde_json::from_str("1450").unwrap();
        assert_eq!(back.cents(), 1450);
    }
}
