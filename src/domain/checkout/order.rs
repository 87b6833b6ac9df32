//! Placed orders and the confirmation shown to the shopper.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::form::CustomerDetails;
use crate::domain::cart::{Cart, CartTotals, LineItem};
use crate::domain::foundation::{OrderId, Timestamp, ValidationError};

/// Days between placing an order and its estimated delivery.
pub const DELIVERY_ESTIMATE_DAYS: i64 = 7;

/// Six-digit public order number (100000 to 999999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct OrderNumber(u32);

impl OrderNumber {
    pub const MIN: u32 = 100_000;
    pub const MAX: u32 = 999_999;

    /// # Errors
    ///
    /// Returns `ValidationError` when `value` is not six digits.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::invalid_format(
                "order_number",
                format!("expected six digits, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Draws a fresh order number from 128 random bits.
    pub fn generate() -> Self {
        let span = u128::from(Self::MAX - Self::MIN + 1);
        Self(Self::MIN + (Uuid::new_v4().as_u128() % span) as u32)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for OrderNumber {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderNumber> for u32 {
    fn from(number: OrderNumber) -> Self {
        number.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a placed order, returned to the shopper.
///
/// Captured from the cart before it is cleared, so it stays valid after.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub order_date: Timestamp,
    pub estimated_delivery: Timestamp,
    pub items: Vec<LineItem>,
    pub item_count: u64,
    pub totals: CartTotals,
    pub customer: CustomerDetails,
}

impl OrderConfirmation {
    pub fn new(
        order_id: OrderId,
        order_number: OrderNumber,
        order_date: Timestamp,
        cart: &Cart,
        customer: CustomerDetails,
    ) -> Self {
        Self {
            order_id,
            order_number,
            order_date,
            estimated_delivery: order_date.add_days(DELIVERY_ESTIMATE_DAYS),
            items: cart.items().to_vec(),
            item_count: cart.item_count(),
            totals: *cart.totals(),
            customer,
        }
    }
}
