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
//! │  In many retail systems:                                                │
//! │    Rp10.000 × 7% three ways drifts by a rupiah depending on order       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupiah                                           │
//! │    The rupiah has no minor unit in circulation, so amounts are plain    │
//! │    i64 values. Percentages are basis points and the division point      │
//! │    is explicit, so any rounding is deliberate and in ONE place.         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gudang_core::money::Money;
//!
//! // Create from whole rupiah (there is no fractional constructor)
//! let price = Money::from_rupiah(15_000);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                          // Rp30.000
//! let total = price + Money::from_rupiah(5_000);    // Rp20.000
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::pricing::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole Indonesian rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and deltas
/// - **Single field newtype**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support — serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    ///
    /// ## Example
    /// ```rust
    /// use gudang_core::money::Money;
    ///
    /// let price = Money::from_rupiah(15_000_000);
    /// assert_eq!(price.rupiah(), 15_000_000);
    /// ```
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use gudang_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use gudang_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(2_500);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.rupiah(), 7_500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates the discount portion of this amount for a given rate.
    ///
    /// ## Implementation
    /// Integer math with i128 widening: `(amount * bps + 5000) / 10000`.
    /// The +5000 rounds the half-way case up instead of truncating, so
    /// Rp1.234 at 5% is Rp62, not Rp61.
    ///
    /// ## Example
    /// ```rust
    /// use gudang_core::money::Money;
    /// use gudang_core::pricing::DiscountRate;
    ///
    /// let subtotal = Money::from_rupiah(100_000);
    /// let discount = subtotal.discount_amount(DiscountRate::from_bps(700)); // 7%
    /// assert_eq!(discount.rupiah(), 7_000);
    /// ```
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        // i128 prevents overflow on large amounts before the division
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_rupiah(amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the Indonesian convention:
/// `Rp` prefix, dot-separated thousands, leading minus for negatives.
///
/// ## Note
/// This is for logs and the demo output. Proper locale formatting is a
/// presentation concern and out of scope here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Groups a non-negative number into dot-separated thousands: 1234567 → "1.234.567".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators of Money (for inventory totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
