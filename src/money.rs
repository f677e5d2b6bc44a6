//! Fixed-point monetary type with 4 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so revenue
//! accumulation stays exact instead of drifting like binary floats.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A monetary value held at exactly 4 decimal places.
///
/// Wraps `rust_decimal::Decimal` with a fixed scale. Parsed prices are
/// normalized to 4 places on construction; from then on sums and
/// integer-quantity products are exact, so no further rounding occurs in
/// the pipeline. Serializes to JSON as a plain number.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use order_analytics::Money;
///
/// let price = Money::from_str("10.5").unwrap();
/// assert_eq!(price.to_string(), "10.5000");
/// assert_eq!(price.checked_times(3).unwrap().to_string(), "31.5000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 4;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, normalizing to 4 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly below zero.
    ///
    /// A negatively-signed zero (`-0.0`) is not considered negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies this value by an integer quantity.
    ///
    /// Exact for any 4-decimal-place price, so a row subtotal never rounds.
    /// Returns `None` when the product exceeds the representable range, so
    /// an extreme input surfaces as an error instead of a panic.
    pub fn checked_times(&self, quantity: u64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Money::new)
    }

    /// Adds another value, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}
