//! HTTP adapter for cart endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddItemRequest, CartItemResponse, CartResponse, TotalsDisplay, UpdateQuantityRequest};
pub use routes::cart_routes;
