//! Cart aggregate.
//!
//! Owns the line items of one shopper and the totals derived from them.
//! Totals are recomputed by every mutation before it returns, so readers
//! never observe stale values.
//!
//! A cart can be claimed by one order at a time. The claim does not freeze
//! the cart: shoppers keep editing it while the order is in flight, and only
//! the quantities that were ordered are taken out when the order completes.

use serde::Serialize;

use super::errors::CartError;
use super::line_item::LineItem;
use super::pricing::{CartTotals, PricingPolicy};
use crate::domain::catalog::Product;
use crate::domain::foundation::{Money, OrderId, ProductId, Timestamp};

/// Shopping cart aggregate.
///
/// # Invariants
///
/// - at most one line item per product id
/// - every line item has `quantity >= 1`
/// - items keep first-insertion order
/// - `totals` always equals `pricing.totals_for(sum of line totals)`
/// - at most one order holds a checkout claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
    #[serde(skip)]
    pricing: PricingPolicy,
    totals: CartTotals,
    updated_at: Timestamp,
    #[serde(skip)]
    checkout: Option<OrderId>,
}

impl Cart {
    /// Creates an empty cart. All totals are zero, including shipping.
    pub fn new(pricing: PricingPolicy) -> Self {
        Self {
            items: Vec::new(),
            pricing,
            totals: CartTotals::zero(),
            updated_at: Timestamp::now(),
            checkout: None,
        }
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line keeps its original price snapshot and gains one unit;
    /// otherwise a new line is appended with quantity 1.
    pub fn add_item(&mut self, product: &Product) {
        match self.line_mut(product.id) {
            Some(line) => line.increment(),
            None => self.items.push(LineItem::from_product(product)),
        }
        self.touch();
    }

    /// Removes the line for `product_id`. Returns `false` if it was not present.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.product_id() != product_id);
        if self.items.len() == before {
            return false;
        }
        self.touch();
        true
    }

    /// Sets the quantity of an existing line to `max(1, requested)`.
    ///
    /// Returns `false` and leaves the cart untouched when the product is not
    /// in the cart; a missing line is never created here.
    pub fn update_quantity(&mut self, product_id: ProductId, requested: i64) -> bool {
        let Some(line) = self.line_mut(product_id) else {
            return false;
        };
        line.set_quantity(requested);
        self.touch();
        true
    }

    /// Empties the cart and resets every total to zero.
    ///
    /// A pending checkout claim survives; the order in flight still owns it.
    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    /// Claims the cart for `order_id` and returns a snapshot of what is
    /// being ordered.
    ///
    /// # Errors
    ///
    /// - `CartError::CheckoutInProgress` if another order holds the claim
    /// - `CartError::EmptyCart` if there is nothing to order
    pub fn begin_checkout(&mut self, order_id: OrderId) -> Result<Cart, CartError> {
        if let Some(pending) = self.checkout {
            return Err(CartError::CheckoutInProgress(pending));
        }
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let snapshot = self.clone();
        self.checkout = Some(order_id);
        Ok(snapshot)
    }

    /// Takes the `ordered` quantities out of the cart and drops the claim.
    ///
    /// Lines added or topped up after the claim keep whatever exceeds the
    /// ordered quantity. Returns `false` without changing anything when
    /// `order_id` does not hold the claim.
    pub fn complete_checkout(&mut self, order_id: OrderId, ordered: &[LineItem]) -> bool {
        if self.checkout != Some(order_id) {
            return false;
        }
        self.checkout = None;
        for line in ordered {
            let product_id = line.product_id();
            let Some(current) = self.line_mut(product_id) else {
                continue;
            };
            let remaining = i64::from(current.quantity()) - i64::from(line.quantity());
            if remaining >= 1 {
                current.set_quantity(remaining);
            } else {
                self.items.retain(|l| l.product_id() != product_id);
            }
        }
        self.touch();
        true
    }

    /// Drops the claim held by `order_id`, leaving the lines as they are.
    pub fn release_checkout(&mut self, order_id: OrderId) -> bool {
        if self.checkout != Some(order_id) {
            return false;
        }
        self.checkout = None;
        true
    }

    /// The order currently holding the checkout claim.
    pub fn checkout_in_progress(&self) -> Option<OrderId> {
        self.checkout
    }

    /// Empty and unclaimed: nothing a store needs to keep.
    pub fn is_idle(&self) -> bool {
        self.items.is_empty() && self.checkout.is_none()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.product_id() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity())).sum()
    }

    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    pub fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    pub fn shipping_fee(&self) -> Money {
        self.totals.shipping_fee
    }

    pub fn tax_amount(&self) -> Money {
        self.totals.tax_amount
    }

    pub fn total(&self) -> Money {
        self.totals.total
    }

    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }

    fn touch(&mut self) {
        self.recalculate();
        self.updated_at = Timestamp::now();
    }

    fn recalculate(&mut self) {
        if self.items.is_empty() {
            self.totals = CartTotals::zero();
            return;
        }
        let subtotal: Money = self.items.iter().map(LineItem::line_total).sum();
        self.totals = self.pricing.totals_for(subtotal);
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}
