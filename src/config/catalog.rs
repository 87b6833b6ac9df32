//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where products come from. Without a seed file the built-in storefront
/// products are served.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML file listing the products
    pub seed_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.seed_path {
            Some(path) if !path.is_file() => Err(ValidationError::CatalogSeedMissing(
                path.display().to_string(),
            )),
            _ => Ok(()),
        }
    }
}
