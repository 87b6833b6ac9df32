//! Route configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_product, list_categories, search_products};
use crate::adapters::http::StorefrontAppState;

/// Creates the catalog router.
///
/// Routes:
/// - `GET /api/products` - Search (`q`, `category`, `min_price`, `max_price`)
/// - `GET /api/products/:id` - Product details
/// - `GET /api/categories` - Category names
pub fn catalog_routes() -> Router<StorefrontAppState> {
    Router::new()
        .route("/api/products", get(search_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/categories", get(list_categories))
}
