//! Line item: one product and its quantity in a cart.

use serde::Serialize;

use crate::domain::catalog::Product;
use crate::domain::foundation::{Money, ProductId};

/// A product reference with a quantity.
///
/// Price and display fields are copied from the product when the line is
/// first created and are never refreshed from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    product_id: ProductId,
    name: String,
    image: String,
    category: String,
    unit_price: Money,
    quantity: u32,
}

impl LineItem {
    pub(super) fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub(super) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Sets the quantity, never going below 1.
    pub(super) fn set_quantity(&mut self, requested: i64) {
        self.quantity = requested.clamp(1, i64::from(u32::MAX)) as u32;
    }
}
