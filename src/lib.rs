//! Artisan Storefront - Storefront backend for a handcrafted goods shop.
//!
//! Product catalog and search, a per-session shopping cart whose totals
//! (subtotal, shipping, tax, total) are always derived from its lines, and a
//! four-step checkout that places orders with an external order service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
