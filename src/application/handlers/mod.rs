//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use cart::*;
pub use catalog::*;
pub use checkout::*;
