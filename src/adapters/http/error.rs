//! Error responses shared by every endpoint.
//!
//! Module errors are reduced to an `ErrorCode`, which fixes the HTTP status,
//! and rendered as `{ "error_code", "message", "details"? }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error_code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let response = Self::new(err.code, err.message);
        if err.details.is_empty() {
            response
        } else {
            response.with_details(serde_json::json!(err.details))
        }
    }
}

/// HTTP status for an error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidQuantity => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ProductNotFound | ErrorCode::UnknownProduct => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition
        | ErrorCode::ProductUnavailable
        | ErrorCode::EmptyCart
        | ErrorCode::CheckoutInProgress => StatusCode::CONFLICT,
        ErrorCode::OrderRejected | ErrorCode::ExternalServiceError => StatusCode::BAD_GATEWAY,
        ErrorCode::OrderTimeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders an error body with the status its code maps to.
pub fn error_response(body: ErrorResponse, code: ErrorCode) -> Response {
    let status = status_for(code);
    if status.is_server_error() {
        tracing::error!(error_code = %code, message = %body.message, "Request failed");
    }
    (status, Json(body)).into_response()
}

/// 400 for malformed input that never reached a handler.
pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_for(ErrorCode::ProductNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cart_conflicts_map_to_409() {
        assert_eq!(status_for(ErrorCode::EmptyCart), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::CheckoutInProgress), StatusCode::CONFLICT);
    }

    #[test]
    fn order_failures_map_to_gateway_statuses() {
        assert_eq!(status_for(ErrorCode::OrderRejected), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(ErrorCode::OrderTimeout), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn domain_error_details_become_json() {
        let err = DomainError::validation("email", "Email is invalid");
        let body = ErrorResponse::from(err);

        assert_eq!(body.error_code, "VALIDATION_FAILED");
        assert_eq!(body.details.unwrap()["field"], "email");
    }

    #[test]
    fn empty_details_are_omitted() {
        let body = ErrorResponse::new(ErrorCode::EmptyCart, "Your cart is empty");
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }
}
