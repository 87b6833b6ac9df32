//! Pricing configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cart::PricingPolicy;
use crate::domain::foundation::Money;

/// Shipping and tax rules applied to every cart.
///
/// Amounts are dollars, e.g. `ARTISAN__PRICING__FLAT_SHIPPING_FEE=5.99`.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Subtotals strictly above this ship free
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: Decimal,

    #[serde(default = "default_flat_shipping_fee")]
    pub flat_shipping_fee: Decimal,

    /// Fraction of the subtotal, e.g. `0.08`
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

impl PricingConfig {
    /// Build the pricing policy these settings describe
    pub fn to_policy(&self) -> Result<PricingPolicy, ValidationError> {
        PricingPolicy::new(
            Money::new(self.free_shipping_threshold),
            Money::new(self.flat_shipping_fee),
            self.tax_rate,
        )
        .map_err(|e| ValidationError::InvalidPricing(e.to_string()))
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_policy().map(|_| ())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping_fee: default_flat_shipping_fee(),
            tax_rate: default_tax_rate(),
        }
    }
}

fn default_free_shipping_threshold() -> Decimal {
    Decimal::new(50, 0)
}

fn default_flat_shipping_fee() -> Decimal {
    Decimal::new(599, 2)
}

fn default_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_storefront_policy() {
        let policy = PricingConfig::default().to_policy().unwrap();
        assert_eq!(policy, PricingPolicy::default());
    }

    #[test]
    fn test_negative_fee_is_invalid() {
        let config = PricingConfig {
            flat_shipping_fee: Decimal::new(-1, 0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPricing(_))
        ));
    }

    #[test]
    fn test_tax_rate_above_one_is_invalid() {
        let config = PricingConfig {
            tax_rate: Decimal::new(15, 1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
