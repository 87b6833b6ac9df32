//! HTTP DTOs for checkout endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::cart::{CartItemResponse, TotalsDisplay};
use crate::application::handlers::ValidateStepResult;
use crate::domain::cart::CartTotals;
use crate::domain::checkout::{
    CheckoutForm, CheckoutStep, CustomerDetails, FieldErrors, OrderConfirmation,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/checkout/validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateStepRequest {
    pub step: CheckoutStep,
    #[serde(default)]
    pub form: CheckoutForm,
}

/// Body of `POST /api/checkout/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    pub form: CheckoutForm,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ValidateStepResponse {
    pub step: CheckoutStep,
    pub valid: bool,
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<CheckoutStep>,
}

impl From<ValidateStepResult> for ValidateStepResponse {
    fn from(result: ValidateStepResult) -> Self {
        Self {
            step: result.step,
            valid: result.valid,
            errors: result.errors,
            next_step: result.next_step,
        }
    }
}

/// Confirmation shown once an order is placed.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmationResponse {
    pub order_id: String,
    pub order_number: u32,
    pub order_date: String,
    pub estimated_delivery: String,
    pub items: Vec<CartItemResponse>,
    pub item_count: u64,
    pub totals: CartTotals,
    pub display: TotalsDisplay,
    pub customer: CustomerDetails,
}

impl From<OrderConfirmation> for OrderConfirmationResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        Self {
            order_id: confirmation.order_id.to_string(),
            order_number: confirmation.order_number.value(),
            order_date: confirmation.order_date.to_rfc3339(),
            estimated_delivery: confirmation.estimated_delivery.to_rfc3339(),
            items: confirmation.items.iter().map(Into::into).collect(),
            item_count: confirmation.item_count,
            display: (&confirmation.totals).into(),
            totals: confirmation.totals,
            customer: confirmation.customer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_request_defaults_missing_form() {
        let req: ValidateStepRequest = serde_json::from_str(r#"{"step": "shipping"}"#).unwrap();
        assert_eq!(req.step, CheckoutStep::Shipping);
        assert!(req.form.shipping.first_name.is_empty());
    }

    #[test]
    fn valid_step_response_includes_next_step() {
        let response = ValidateStepResponse {
            step: CheckoutStep::Account,
            valid: true,
            errors: FieldErrors::new(),
            next_step: Some(CheckoutStep::Shipping),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["next_step"], "shipping");
        assert_eq!(json["errors"], serde_json::json!({}));
    }
}
