//! Amount value object for asset quantities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A quantity of some asset (quote units or option tokens).
///
/// Represented as a Decimal so fractional option-token quantities survive
/// sizing arithmetic. The asset an Amount refers to is carried by context,
/// never by the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a new Amount from a Decimal.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create an Amount from an integer number of whole units.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Subtract, flooring at zero instead of going negative.
    #[must_use]
    pub fn saturating_sub(&self, rhs: Self) -> Self {
        if rhs.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - rhs.0)
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_new_and_display() {
        let a = Amount::new(dec!(3.8095238));
        assert_eq!(format!("{a}"), "3.8095238");
    }

    #[test]
    fn amount_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::ZERO.is_positive());
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn amount_saturating_sub_floors_at_zero() {
        let small = Amount::from_i64(10);
        let large = Amount::from_i64(25);
        assert_eq!(large.saturating_sub(small), Amount::from_i64(15));
        assert_eq!(small.saturating_sub(large), Amount::ZERO);
        assert_eq!(small.saturating_sub(small), Amount::ZERO);
    }

    #[test]
    fn amount_arithmetic() {
        let a = Amount::from_i64(1000);
        let b = Amount::from_i64(560);
        assert_eq!((a + b).value(), dec!(1560));
        assert_eq!((a - b).value(), dec!(440));
    }

    #[test]
    fn amount_ordering() {
        assert!(Amount::from_i64(1) < Amount::from_i64(2));
        assert!(Amount::new(dec!(3.81)) > Amount::new(dec!(3.8095238)));
    }

    #[test]
    fn amount_serde_roundtrip() {
        let a = Amount::new(dec!(560));
        let json = serde_json::to_string(&a).unwrap();
        let parsed: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, a);
    }
}
