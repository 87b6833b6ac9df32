//! SearchProductsHandler - Query handler for catalog search.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, ScoredProduct, SearchQuery};
use crate::ports::ProductCatalog;

/// Result of a catalog search.
#[derive(Debug, Clone)]
pub struct SearchProductsResult {
    pub products: Vec<ScoredProduct>,
    pub total: usize,
}

pub struct SearchProductsHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl SearchProductsHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: SearchQuery) -> Result<SearchProductsResult, CatalogError> {
        let products = self.catalog.search(&query).await?;
        tracing::debug!(query = %query.text, hits = products.len(), "Catalog searched");
        Ok(SearchProductsResult {
            total: products.len(),
            products,
        })
    }
}
