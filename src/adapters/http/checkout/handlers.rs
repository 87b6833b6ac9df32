//! HTTP handlers for checkout endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, ErrorResponse};
use crate::adapters::http::middleware::CurrentSession;
use crate::adapters::http::StorefrontAppState;
use crate::application::handlers::{PlaceOrderCommand, ValidateStepCommand};
use crate::domain::checkout::CheckoutError;

use super::dto::{
    OrderConfirmationResponse, PlaceOrderRequest, ValidateStepRequest, ValidateStepResponse,
};

/// POST /api/checkout/validate - Validate one step of the checkout form
///
/// Invalid fields are reported with 200 and `valid: false`.
pub async fn validate_step(
    State(state): State<StorefrontAppState>,
    Json(req): Json<ValidateStepRequest>,
) -> Response {
    let cmd = ValidateStepCommand {
        step: req.step,
        form: req.form,
    };

    match state.validate_step_handler().handle(cmd) {
        Ok(result) => {
            (StatusCode::OK, Json(ValidateStepResponse::from(result))).into_response()
        }
        Err(e) => handle_checkout_error(e),
    }
}

/// POST /api/checkout/orders - Place the session's cart as an order
pub async fn place_order(
    State(state): State<StorefrontAppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<PlaceOrderRequest>,
) -> Response {
    let cmd = PlaceOrderCommand {
        session,
        form: req.form,
    };

    match state.place_order_handler().handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(OrderConfirmationResponse::from(result.confirmation)),
        )
            .into_response(),
        Err(e) => handle_checkout_error(e),
    }
}

fn handle_checkout_error(error: CheckoutError) -> Response {
    let code = error.code();
    let body = ErrorResponse::new(code, error.message());
    let body = match &error {
        CheckoutError::Validation { step, errors } => body.with_details(serde_json::json!({
            "step": step,
            "fields": errors,
        })),
        _ => body,
    };
    error_response(body, code)
}
