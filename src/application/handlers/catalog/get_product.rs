//! GetProductHandler - Query handler for a single product.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Product};
use crate::domain::foundation::ProductId;
use crate::ports::ProductCatalog;

#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub product_id: ProductId,
}

pub struct GetProductHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl GetProductHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<Product, CatalogError> {
        self.catalog
            .get(query.product_id)
            .await?
            .ok_or(CatalogError::NotFound(query.product_id))
    }
}
