//! Product catalog adapters.

mod in_memory;
mod yaml;

pub use in_memory::InMemoryProductCatalog;
pub use yaml::{load_catalog_file, parse_products};
