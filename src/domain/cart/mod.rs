//! Cart domain module.
//!
//! The cart aggregate, its line items, and the pricing policy that derives
//! subtotal, shipping, tax and total.

mod aggregate;
mod errors;
mod line_item;
mod pricing;
mod quantity;

pub use aggregate::Cart;
pub use errors::CartError;
pub use line_item::LineItem;
pub use pricing::{CartTotals, PricingPolicy};
pub use quantity::QuantityInput;
