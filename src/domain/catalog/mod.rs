//! Catalog domain module.
//!
//! Products offered by the storefront and the search rules over them.

mod errors;
mod product;
mod search;

pub use errors::CatalogError;
pub use product::Product;
pub use search::{search, ScoredProduct, SearchFilters, SearchQuery};
