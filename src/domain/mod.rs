//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, money, errors, events, timestamps)
//! - `catalog` - Products and catalog search
//! - `cart` - Cart aggregate, line items and pricing
//! - `checkout` - Checkout wizard, validation and order confirmations
//! - `shopper` - Session context threaded through cart operations

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod foundation;
pub mod shopper;
