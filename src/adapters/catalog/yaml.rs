//! YAML catalog seed loading.
//!
//! A seed file is a YAML list of products:
//!
//! ```yaml
//! - id: 1
//!   name: "Handcrafted Ceramic Mug"
//!   price: "28.99"
//!   category: "Ceramics"
//!   tags: ["mug", "kitchen"]
//! ```

use std::path::Path;

use super::InMemoryProductCatalog;
use crate::domain::catalog::{CatalogError, Product};

/// Parses a YAML product list.
pub fn parse_products(yaml: &str) -> Result<Vec<Product>, CatalogError> {
    serde_yaml::from_str(yaml).map_err(|e| CatalogError::invalid_seed(e.to_string()))
}

/// Reads a seed file and builds a catalog from it.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<InMemoryProductCatalog, CatalogError> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::invalid_seed(format!("{}: {}", path.display(), e)))?;
    let products = parse_products(&yaml)?;
    tracing::info!(path = %path.display(), count = products.len(), "Loaded catalog seed file");
    InMemoryProductCatalog::new(products)
}
