//! Checkout command handlers.

mod place_order;
mod validate_step;

pub use place_order::{
    PlaceOrderCommand, PlaceOrderHandler, PlaceOrderResult, DEFAULT_ORDER_TIMEOUT,
};
pub use validate_step::{ValidateStepCommand, ValidateStepHandler, ValidateStepResult};
