//! Cart-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, OrderId, ProductId};

/// Errors raised around cart mutations.
///
/// `InvalidQuantity` and `UnknownProduct` are recovered where they occur
/// (clamp to 1, no-op); they exist so callers can log them with a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Requested quantity could not be read as a whole number.
    InvalidQuantity { raw: String },

    /// Mutation named a product that is not in the cart.
    UnknownProduct(ProductId),

    /// Product id does not exist in the catalog.
    ProductNotFound(ProductId),

    /// Product exists but is out of stock.
    ProductUnavailable(ProductId),

    /// Checkout was asked for a cart with no lines.
    EmptyCart,

    /// Another order already holds the cart.
    CheckoutInProgress(OrderId),

    /// Cart store failed.
    Storage(String),
}

impl CartError {
    pub fn invalid_quantity(raw: impl Into<String>) -> Self {
        CartError::InvalidQuantity { raw: raw.into() }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        CartError::Storage(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CartError::UnknownProduct(_) => ErrorCode::UnknownProduct,
            CartError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            CartError::ProductUnavailable(_) => ErrorCode::ProductUnavailable,
            CartError::EmptyCart => ErrorCode::EmptyCart,
            CartError::CheckoutInProgress(_) => ErrorCode::CheckoutInProgress,
            CartError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            CartError::InvalidQuantity { raw } => {
                format!("Quantity must be a whole number, got {}", raw)
            }
            CartError::UnknownProduct(id) => format!("Product {} is not in the cart", id),
            CartError::ProductNotFound(id) => format!("Product not found: {}", id),
            CartError::ProductUnavailable(id) => format!("Product {} is out of stock", id),
            CartError::EmptyCart => "Your cart is empty".to_string(),
            CartError::CheckoutInProgress(_) => {
                "An order for this cart is already being placed".to_string()
            }
            CartError::Storage(reason) => format!("Cart storage error: {}", reason),
        }
    }
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CartError {}

impl From<CartError> for DomainError {
    fn from(err: CartError) -> Self {
        let code = err.code();
        let message = err.message();
        match err {
            CartError::ProductNotFound(id)
            | CartError::ProductUnavailable(id)
            | CartError::UnknownProduct(id) => {
                DomainError::new(code, message).with_detail("product_id", id.to_string())
            }
            _ => DomainError::new(code, message),
        }
    }
}

impl From<DomainError> for CartError {
    fn from(err: DomainError) -> Self {
        CartError::Storage(err.to_string())
    }
}
