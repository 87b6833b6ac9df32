//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure. They
//! share one `StorefrontAppState` and the shopper session middleware.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod middleware;
mod state;

use axum::Router;

pub use error::ErrorResponse;
pub use middleware::SESSION_HEADER;
pub use state::StorefrontAppState;

/// Creates the complete storefront API router.
///
/// # Example
///
/// ```ignore
/// let state = StorefrontAppState::new(catalog, store, gateway, notifier, bus);
/// let app = storefront_router(state);
/// ```
pub fn storefront_router(state: StorefrontAppState) -> Router {
    Router::new()
        .merge(catalog::catalog_routes())
        .merge(cart::cart_routes())
        .merge(checkout::checkout_routes())
        .layer(axum::middleware::from_fn(middleware::session_middleware))
        .with_state(state)
}
