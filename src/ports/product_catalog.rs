//! Product catalog port (read side).
//!
//! The cart never talks to the catalog directly; application handlers look
//! products up here and hand them to the aggregate.

use async_trait::async_trait;

use crate::domain::catalog::{Product, ScoredProduct, SearchQuery};
use crate::domain::foundation::{DomainError, ProductId};

/// Read-only access to the products on sale.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Looks up a single product.
    async fn get(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    /// Every product, in catalog order.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Distinct category names in first-seen order.
    async fn categories(&self) -> Result<Vec<String>, DomainError>;

    /// Filters and ranks products for a query.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ScoredProduct>, DomainError>;
}
