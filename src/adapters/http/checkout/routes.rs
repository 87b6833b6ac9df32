//! Route configuration for checkout endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{place_order, validate_step};
use crate::adapters::http::StorefrontAppState;

/// Creates the checkout router.
///
/// Routes:
/// - `POST /api/checkout/validate` - Field errors for one step
/// - `POST /api/checkout/orders` - Place the order (201 with confirmation)
pub fn checkout_routes() -> Router<StorefrontAppState> {
    Router::new()
        .route("/api/checkout/validate", post(validate_step))
        .route("/api/checkout/orders", post(place_order))
}
