//! Checkout-specific error types.

use super::step::CheckoutStep;
use super::validation::FieldErrors;
use crate::domain::cart::CartError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while moving through checkout or placing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// A step has invalid fields.
    Validation {
        step: CheckoutStep,
        errors: FieldErrors,
    },

    /// Tried to move to a step that is not adjacent.
    InvalidTransition {
        from: CheckoutStep,
        to: CheckoutStep,
    },

    /// Order placement with nothing in the cart.
    EmptyCart,

    /// An order for the same cart is still being placed.
    CheckoutInProgress,

    /// Order service refused the order.
    OrderRejected(String),

    /// Order service did not answer in time.
    OrderTimeout { after_secs: u64 },

    /// Order service could not be reached.
    OrderService(String),

    /// Cart store or event bus failed.
    Infrastructure(String),
}

impl CheckoutError {
    pub fn validation(step: CheckoutStep, errors: FieldErrors) -> Self {
        CheckoutError::Validation { step, errors }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::Validation { .. } => ErrorCode::ValidationFailed,
            CheckoutError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            CheckoutError::EmptyCart => ErrorCode::EmptyCart,
            CheckoutError::CheckoutInProgress => ErrorCode::CheckoutInProgress,
            CheckoutError::OrderRejected(_) => ErrorCode::OrderRejected,
            CheckoutError::OrderTimeout { .. } => ErrorCode::OrderTimeout,
            CheckoutError::OrderService(_) => ErrorCode::ExternalServiceError,
            CheckoutError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            CheckoutError::Validation { step, errors } => format!(
                "Please correct {} field(s) in the {} step",
                errors.len(),
                step
            ),
            CheckoutError::InvalidTransition { from, to } => {
                format!("Cannot move from the {} step to the {} step", from, to)
            }
            CheckoutError::EmptyCart => "Your cart is empty".to_string(),
            CheckoutError::CheckoutInProgress => {
                "An order for this cart is already being placed".to_string()
            }
            CheckoutError::OrderRejected(reason) => {
                format!("The order could not be placed: {}", reason)
            }
            CheckoutError::OrderTimeout { after_secs } => format!(
                "The order service did not respond within {} seconds",
                after_secs
            ),
            CheckoutError::OrderService(reason) => {
                format!("The order service is unavailable: {}", reason)
            }
            CheckoutError::Infrastructure(reason) => format!("Internal error: {}", reason),
        }
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CheckoutError {}

impl From<CartError> for CheckoutError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::EmptyCart => CheckoutError::EmptyCart,
            CartError::CheckoutInProgress(_) => CheckoutError::CheckoutInProgress,
            other => CheckoutError::Infrastructure(other.to_string()),
        }
    }
}

impl From<DomainError> for CheckoutError {
    fn from(err: DomainError) -> Self {
        CheckoutError::Infrastructure(err.to_string())
    }
}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        let base = DomainError::new(err.code(), err.message());
        match err {
            CheckoutError::Validation { step, errors } => {
                errors
                    .iter()
                    .fold(base.with_detail("step", step.as_str()), |e, (field, msg)| {
                        e.with_detail(field, msg)
                    })
            }
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_code() {
        assert_eq!(CheckoutError::EmptyCart.code(), ErrorCode::EmptyCart);
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Your cart is empty");
    }

    #[test]
    fn validation_details_include_fields() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email is required");
        let err: DomainError = CheckoutError::validation(CheckoutStep::Account, errors).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("step").map(String::as_str), Some("account"));
        assert_eq!(
            err.details.get("email").map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn claim_refusals_map_to_checkout_errors() {
        let in_progress: CheckoutError =
            CartError::CheckoutInProgress(crate::domain::foundation::OrderId::new()).into();
        assert_eq!(in_progress, CheckoutError::CheckoutInProgress);
        assert_eq!(in_progress.code(), ErrorCode::CheckoutInProgress);

        let empty: CheckoutError = CartError::EmptyCart.into();
        assert_eq!(empty, CheckoutError::EmptyCart);
    }

    #[test]
    fn timeout_message_names_seconds() {
        let err = CheckoutError::OrderTimeout { after_secs: 10 };
        assert_eq!(err.code(), ErrorCode::OrderTimeout);
        assert!(err.message().contains("10 seconds"));
    }
}
