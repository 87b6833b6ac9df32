//! HTTP adapter for checkout endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    OrderConfirmationResponse, PlaceOrderRequest, ValidateStepRequest, ValidateStepResponse,
};
pub use routes::checkout_routes;
