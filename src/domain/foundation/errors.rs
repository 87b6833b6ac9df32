//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' cannot be negative, got {actual}")]
    Negative { field: String, actual: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: impl fmt::Display) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual: actual.to_string(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,
    InvalidQuantity,

    // Not found errors
    ProductNotFound,
    UnknownProduct,

    // State errors
    InvalidStateTransition,
    ProductUnavailable,
    EmptyCart,
    CheckoutInProgress,

    // Order submission errors
    OrderRejected,
    OrderTimeout,
    ExternalServiceError,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidQuantity => "INVALID_QUANTITY",
            ErrorCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ErrorCode::UnknownProduct => "UNKNOWN_PRODUCT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::ProductUnavailable => "PRODUCT_UNAVAILABLE",
            ErrorCode::EmptyCart => "EMPTY_CART",
            ErrorCode::CheckoutInProgress => "CHECKOUT_IN_PROGRESS",
            ErrorCode::OrderRejected => "ORDER_REJECTED",
            ErrorCode::OrderTimeout => "ORDER_TIMEOUT",
            ErrorCode::ExternalServiceError => "EXTERNAL_SERVICE_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let (code, field) = match &err {
            ValidationError::EmptyField { field } => (ErrorCode::EmptyField, field.clone()),
            ValidationError::Negative { field, .. } => (ErrorCode::ValidationFailed, field.clone()),
            ValidationError::InvalidFormat { field, .. } => (ErrorCode::InvalidFormat, field.clone()),
        };
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}
