//! Pricing policy: the single source of shipping and tax constants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, ValidationError};

/// Shipping and tax rules applied to a cart subtotal.
///
/// | Setting | Default |
/// |---------|---------|
/// | Free shipping when subtotal is strictly above | $50.00 |
/// | Flat shipping fee otherwise | $5.99 |
/// | Tax rate on subtotal | 8% |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    free_shipping_threshold: Money,
    flat_shipping_fee: Money,
    tax_rate: Decimal,
}

impl PricingPolicy {
    /// Creates a policy.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if an amount is negative or the tax rate is
    /// outside `0..=1`.
    pub fn new(
        free_shipping_threshold: Money,
        flat_shipping_fee: Money,
        tax_rate: Decimal,
    ) -> Result<Self, ValidationError> {
        if free_shipping_threshold.amount() < Decimal::ZERO {
            return Err(ValidationError::negative(
                "free_shipping_threshold",
                free_shipping_threshold.amount(),
            ));
        }
        if flat_shipping_fee.amount() < Decimal::ZERO {
            return Err(ValidationError::negative(
                "flat_shipping_fee",
                flat_shipping_fee.amount(),
            ));
        }
        if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
            return Err(ValidationError::invalid_format(
                "tax_rate",
                format!("expected a fraction between 0 and 1, got {}", tax_rate),
            ));
        }
        Ok(Self {
            free_shipping_threshold,
            flat_shipping_fee,
            tax_rate,
        })
    }

    pub fn free_shipping_threshold(&self) -> Money {
        self.free_shipping_threshold
    }

    pub fn flat_shipping_fee(&self) -> Money {
        self.flat_shipping_fee
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Shipping is waived only when the subtotal is strictly above the threshold.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_shipping_threshold {
            Money::ZERO
        } else {
            self.flat_shipping_fee
        }
    }

    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.apply_rate(self.tax_rate)
    }

    /// Derives every total from a subtotal. A negative subtotal is floored at zero.
    pub fn totals_for(&self, subtotal: Money) -> CartTotals {
        let subtotal = subtotal.non_negative();
        let shipping_fee = self.shipping_for(subtotal);
        let tax_amount = self.tax_for(subtotal);
        CartTotals {
            subtotal,
            shipping_fee,
            tax_amount,
            total: subtotal + shipping_fee + tax_amount,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::from_cents(5000),
            flat_shipping_fee: Money::from_cents(599),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

/// Derived totals of a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub shipping_fee: Money,
    pub tax_amount: Money,
    pub total: Money,
}

impl CartTotals {
    /// Totals of a cart with nothing in it: every field is zero.
    pub fn zero() -> Self {
        Self::default()
    }
}
