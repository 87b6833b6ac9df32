//! HTTP handlers for cart endpoints.
//!
//! Every endpoint answers with the cart as it stands after the operation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, error_response, ErrorResponse};
use crate::adapters::http::middleware::CurrentSession;
use crate::adapters::http::StorefrontAppState;
use crate::application::handlers::{
    AddItemCommand, ClearCartCommand, GetCartQuery, RemoveItemCommand, UpdateQuantityCommand,
};
use crate::domain::cart::{Cart, CartError};
use crate::domain::foundation::{DomainError, ProductId};

use super::dto::{AddItemRequest, CartResponse, UpdateQuantityRequest};

/// GET /api/cart - Current cart
pub async fn get_cart(
    State(state): State<StorefrontAppState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    cart_result(state.get_cart_handler().handle(GetCartQuery { session }).await)
}

/// POST /api/cart/items - Add one unit of a product
pub async fn add_item(
    State(state): State<StorefrontAppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<AddItemRequest>,
) -> Response {
    let cmd = AddItemCommand {
        session,
        product_id: req.product_id,
    };
    cart_result(state.add_item_handler().handle(cmd).await)
}

/// PUT /api/cart/items/:product_id - Set a line's quantity
pub async fn update_quantity(
    State(state): State<StorefrontAppState>,
    CurrentSession(session): CurrentSession,
    Path(product_id): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Response {
    let Ok(product_id) = product_id.parse::<ProductId>() else {
        return bad_request("Invalid product ID");
    };

    let cmd = UpdateQuantityCommand {
        session,
        product_id,
        quantity: req.quantity,
    };
    cart_result(state.update_quantity_handler().handle(cmd).await)
}

/// DELETE /api/cart/items/:product_id - Remove a line
pub async fn remove_item(
    State(state): State<StorefrontAppState>,
    CurrentSession(session): CurrentSession,
    Path(product_id): Path<String>,
) -> Response {
    let Ok(product_id) = product_id.parse::<ProductId>() else {
        return bad_request("Invalid product ID");
    };

    let cmd = RemoveItemCommand {
        session,
        product_id,
    };
    cart_result(state.remove_item_handler().handle(cmd).await)
}

/// DELETE /api/cart - Empty the cart
pub async fn clear_cart(
    State(state): State<StorefrontAppState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    cart_result(state.clear_cart_handler().handle(ClearCartCommand { session }).await)
}

fn cart_result(result: Result<Cart, CartError>) -> Response {
    match result {
        Ok(cart) => (StatusCode::OK, Json(CartResponse::from(&cart))).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

fn handle_cart_error(error: CartError) -> Response {
    let code = error.code();
    error_response(ErrorResponse::from(DomainError::from(error)), code)
}
