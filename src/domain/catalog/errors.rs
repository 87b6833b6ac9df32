//! Catalog-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProductId, ValidationError};

/// Errors raised by catalog lookups and seed loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with this id exists.
    NotFound(ProductId),

    /// Seed data could not be read or parsed.
    InvalidSeed(String),

    /// A product in the seed data violates an invariant.
    InvalidProduct { id: ProductId, reason: String },

    /// Two seed entries share an id.
    DuplicateProduct(ProductId),

    /// The catalog backend failed.
    Storage(String),
}

impl CatalogError {
    pub fn not_found(id: ProductId) -> Self {
        CatalogError::NotFound(id)
    }

    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        CatalogError::InvalidSeed(reason.into())
    }

    pub fn invalid_product(id: ProductId, err: ValidationError) -> Self {
        CatalogError::InvalidProduct {
            id,
            reason: err.to_string(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::NotFound(_) => ErrorCode::ProductNotFound,
            CatalogError::InvalidSeed(_)
            | CatalogError::InvalidProduct { .. }
            | CatalogError::DuplicateProduct(_)
            | CatalogError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            CatalogError::NotFound(id) => format!("Product not found: {}", id),
            CatalogError::InvalidSeed(reason) => format!("Catalog seed is invalid: {}", reason),
            CatalogError::InvalidProduct { id, reason } => {
                format!("Product {} is invalid: {}", id, reason)
            }
            CatalogError::DuplicateProduct(id) => {
                format!("Product {} appears more than once in the catalog", id)
            }
            CatalogError::Storage(reason) => format!("Catalog unavailable: {}", reason),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_product_not_found() {
        let err = CatalogError::not_found(ProductId::new(99));
        assert_eq!(err.code(), ErrorCode::ProductNotFound);
        assert_eq!(err.to_string(), "Product not found: 99");
    }

    #[test]
    fn invalid_product_carries_reason() {
        let err = CatalogError::invalid_product(
            ProductId::new(2),
            ValidationError::empty_field("name"),
        );
        assert_eq!(err.message(), "Product 2 is invalid: Field 'name' cannot be empty");
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = CatalogError::DuplicateProduct(ProductId::new(5)).into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
