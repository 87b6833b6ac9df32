//! HTTP DTOs for cart endpoints.
//!
//! Amounts are exact decimals; the `display` block carries the same totals
//! rounded to cents for rendering.

use serde::{Deserialize, Serialize};

use crate::domain::cart::{Cart, CartTotals, LineItem, QuantityInput};
use crate::domain::foundation::{Money, ProductId};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/cart/items`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
}

/// Body of `PUT /api/cart/items/:product_id`. Any JSON value is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: QuantityInput,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CartItemResponse {
    pub product_id: u64,
    pub name: String,
    pub image: String,
    pub category: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&LineItem> for CartItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id().value(),
            name: item.name().to_string(),
            image: item.image().to_string(),
            category: item.category().to_string(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            line_total: item.line_total(),
        }
    }
}

/// Totals formatted as dollars, e.g. `$117.70`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub shipping_fee: String,
    pub tax_amount: String,
    pub total: String,
}

impl From<&CartTotals> for TotalsDisplay {
    fn from(totals: &CartTotals) -> Self {
        Self {
            subtotal: totals.subtotal.to_string(),
            shipping_fee: totals.shipping_fee.to_string(),
            tax_amount: totals.tax_amount.to_string(),
            total: totals.total.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    pub item_count: u64,
    pub totals: CartTotals,
    pub display: TotalsDisplay,
    pub free_shipping_threshold: Money,
    pub updated_at: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(Into::into).collect(),
            item_count: cart.item_count(),
            totals: *cart.totals(),
            display: cart.totals().into(),
            free_shipping_threshold: cart.pricing().free_shipping_threshold(),
            updated_at: cart.updated_at().to_rfc3339(),
        }
    }
}
