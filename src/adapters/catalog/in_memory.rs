//! In-memory product catalog.

use async_trait::async_trait;
use std::collections::HashSet;

use super::yaml::parse_products;
use crate::domain::catalog::{search, CatalogError, Product, ScoredProduct, SearchQuery};
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::ProductCatalog;

const STOREFRONT_SEED: &str = include_str!("storefront_products.yaml");

/// Immutable catalog held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
}

impl InMemoryProductCatalog {
    /// Builds a catalog, checking every product and rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            product
                .validate()
                .map_err(|e| CatalogError::invalid_product(product.id, e))?;
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The twelve handcrafted products the storefront ships with.
    pub fn storefront() -> Result<Self, CatalogError> {
        Self::new(parse_products(STOREFRONT_SEED)?)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.find(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.clone())
    }

    async fn categories(&self) -> Result<Vec<String>, DomainError> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ScoredProduct>, DomainError> {
        Ok(search(&self.products, query))
    }
}
