//! ListCategoriesHandler - Query handler for catalog categories.

use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::ports::ProductCatalog;

pub struct ListCategoriesHandler {
    catalog: Arc<dyn ProductCatalog>,
}

impl ListCategoriesHandler {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    /// Distinct categories in first-seen order.
    pub async fn handle(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.catalog.categories().await?)
    }
}
