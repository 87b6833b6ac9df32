//! Money value object backed by an exact decimal.
//!
//! Amounts keep full precision through cart arithmetic (tax on 108.98 is
//! exactly 8.7184); rounding to cents happens only for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::ValidationError;

/// A USD amount.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps an arbitrary decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from whole cents, e.g. `from_cents(2899)` is $28.99.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Creates a catalog price, rejecting negative amounts.
    pub fn try_price(amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::negative("price", amount));
        }
        Ok(Self(amount))
    }

    /// Returns the exact decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies by an item quantity.
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Multiplies by a fractional rate (0.08 for 8%).
    pub fn apply_rate(&self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }

    /// Floors the amount at zero.
    pub fn non_negative(&self) -> Self {
        if self.0.is_sign_negative() {
            Self::ZERO
        } else {
            *self
        }
    }

    /// Rounds to whole cents, half away from zero.
    pub fn rounded(&self) -> Self {
        let mut cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        Self(cents)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.rounded().0;
        if cents.is_sign_negative() && !cents.is_zero() {
            write!(f, "-${}", cents.abs())
        } else {
            write!(f, "${}", cents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cents_builds_exact_amount() {
        assert_eq!(Money::from_cents(2899).amount(), Decimal::new(2899, 2));
    }

    #[test]
    fn try_price_rejects_negative() {
        let result = Money::try_price(Decimal::new(-150, 2));
        assert!(matches!(result, Err(ValidationError::Negative { .. })));
    }

    #[test]
    fn try_price_accepts_zero() {
        assert_eq!(Money::try_price(Decimal::ZERO).unwrap(), Money::ZERO);
    }

    #[test]
    fn times_multiplies_by_quantity() {
        assert_eq!(Money::from_cents(2899).times(3), Money::from_cents(8697));
    }

    #[test]
    fn apply_rate_keeps_sub_cent_precision() {
        let tax = Money::from_cents(10898).apply_rate(Decimal::new(8, 2));
        assert_eq!(tax.amount(), Decimal::new(87184, 4));
    }

    #[test]
    fn rounded_goes_half_away_from_zero() {
        assert_eq!(Money::new(Decimal::new(1176984, 4)).rounded(), Money::from_cents(11770));
        assert_eq!(Money::new(Decimal::new(1005, 3)).rounded(), Money::from_cents(101));
    }

    #[test]
    fn display_pads_to_two_places() {
        assert_eq!(Money::new(Decimal::new(5, 0)).to_string(), "$5.00");
        assert_eq!(Money::new(Decimal::new(1176984, 4)).to_string(), "$117.70");
    }

    #[test]
    fn non_negative_floors_at_zero() {
        assert_eq!(Money::from_cents(-1).non_negative(), Money::ZERO);
        assert_eq!(Money::from_cents(1).non_negative(), Money::from_cents(1));
    }

    #[test]
    fn sum_adds_all_amounts() {
        let total: Money = vec![Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(599)).unwrap();
        assert_eq!(json, "\"5.99\"");
    }
}
