//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProductCatalog` - Product lookup and search
//! - `CartStore` - Per-session cart persistence
//! - `OrderGateway` - Order submission to the order service
//! - `ConfirmationNotifier` - Order confirmation delivery
//! - `EventPublisher` - Domain event publishing

mod cart_store;
mod confirmation_notifier;
mod event_publisher;
mod order_gateway;
mod product_catalog;

pub use cart_store::{CartMutation, CartStore};
pub use confirmation_notifier::ConfirmationNotifier;
pub use event_publisher::EventPublisher;
pub use order_gateway::{OrderGateway, OrderGatewayError, OrderReceipt, OrderRequest};
pub use product_catalog::ProductCatalog;
