//! Route configuration for cart endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{add_item, clear_cart, get_cart, remove_item, update_quantity};
use crate::adapters::http::StorefrontAppState;

/// Creates the cart router.
///
/// All routes act on the cart of the request's shopper session.
///
/// Routes:
/// - `GET /api/cart` - Current cart with totals
/// - `DELETE /api/cart` - Empty the cart
/// - `POST /api/cart/items` - Add one unit of a product
/// - `PUT /api/cart/items/:product_id` - Set quantity
/// - `DELETE /api/cart/items/:product_id` - Remove a line
pub fn cart_routes() -> Router<StorefrontAppState> {
    Router::new()
        .route("/api/cart", get(get_cart).delete(clear_cart))
        .route("/api/cart/items", post(add_item))
        .route(
            "/api/cart/items/:product_id",
            put(update_quantity).delete(remove_item),
        )
}
