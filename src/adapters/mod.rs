//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Product catalog (in-memory, YAML seed files)
//! - `cart` - Per-session cart storage (in-memory)
//! - `orders` - Order gateway (HTTP order service, simulated)
//! - `notifications` - Order confirmation delivery (logging)
//! - `events` - Event bus (in-memory)
//! - `http` - REST API (axum)

pub mod cart;
pub mod catalog;
pub mod events;
pub mod http;
pub mod notifications;
pub mod orders;

pub use cart::InMemoryCartStore;
pub use catalog::InMemoryProductCatalog;
pub use events::InMemoryEventBus;
pub use notifications::LoggingConfirmationNotifier;
pub use orders::{HttpOrderGateway, HttpOrderGatewayConfig, SimulatedOrderGateway};
