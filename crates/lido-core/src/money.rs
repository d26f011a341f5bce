//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                        │
//! │                                                                     │
//! │  A season of per-day rates, extra entrances and discounts is        │
//! │  exactly the kind of repeated addition that lets float error        │
//! │  creep into a guest's bill.                                         │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    3.50 €/day × 16 days = 350 × 16 = 5600 cents, exactly            │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lido_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(350); // 3.50 €/day
//!
//! // Arithmetic operations
//! let week = rate * 7;                       // 24.50 €
//! let total = week + Money::from_cents(500); // 29.50 €
//!
//! // NEVER do this:
//! // let bad = Money::from_float(3.50); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for the long-stay discount
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as a plain number of cents
///
/// ## Where Money Flows
/// ```text
/// Category.price ──► per-period stay totals ──┐
/// RateSchedule.price_entrance ──► entrances ──┼──► Breakdown ──► grand total
/// RateSchedule.price_booth ──► booth ─────────┤
/// RateSchedule.price_discount ──► "Sconto" ───┘    (negative entry)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use lido_core::money::Money;
    ///
    /// let rate = Money::from_cents(350); // Represents 3.50 €
    /// assert_eq!(rate.cents(), 350);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from euros and cents.
    ///
    /// For negative amounts, only the euro part should be negative:
    /// `from_euros_cents(-5, 50)` is -5.50 €, not -4.50 €.
    ///
    /// ## Example
    /// ```rust
    /// use lido_core::money::Money;
    ///
    /// assert_eq!(Money::from_euros_cents(3, 50).cents(), 350);
    /// assert_eq!(Money::from_euros_cents(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_euros_cents(euros: i64, cents: i64) -> Self {
        if euros < 0 {
            Money(euros * 100 - cents)
        } else {
            Money(euros * 100 + cents)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-euro portion.
    ///
    /// ## Example
    /// ```rust
    /// use lido_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(350).euros(), 3);
    /// assert_eq!(Money::from_cents(-550).euros(), -5);
    /// ```
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cent portion (always 0-99, absolute value).
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a per-day rate by a day count.
    ///
    /// ## Example
    /// ```rust
    /// use lido_core::money::Money;
    ///
    /// let rate = Money::from_cents(500); // 5.00 €/day
    /// assert_eq!(rate.multiply_days(10).cents(), 5000); // 50.00 €
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way the calculator prints it:
/// sign, two decimals, trailing euro sign (`-12.00 €`).
///
/// ## Note
/// This is the display-time rounding boundary; internal arithmetic stays
/// in exact cents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02} €", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Negation, used for the long-stay discount entry.
impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by i64 (day counts, entrance counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
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
        let money = Money::from_cents(350);
        assert_eq!(money.cents(), 350);
        assert_eq!(money.euros(), 3);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_euros_cents() {
        assert_eq!(Money::from_euros_cents(3, 50).cents(), 350);
        assert_eq!(Money::from_euros_cents(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(5000)), "50.00 €");
        assert_eq!(format!("{}", Money::from_cents(350)), "3.50 €");
        assert_eq!(format!("{}", Money::from_cents(-1200)), "-12.00 €");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_add_assign() {
        let mut total = Money::zero();
        total += Money::from_cents(5000);
        total += Money::from_cents(1800);
        total += Money::from_cents(-8000);
        assert_eq!(total.cents(), -1200);
    }

    #[test]
    fn test_multiply_days() {
        let rate = Money::from_cents(500);
        assert_eq!(rate.multiply_days(10).cents(), 5000);
        assert_eq!(rate.multiply_days(0).cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let discount = Money::from_cents(-500);
        assert!(discount.is_negative());
        assert_eq!(discount.abs().cents(), 500);
    }
}
