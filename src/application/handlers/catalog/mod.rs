//! Catalog handlers.
//!
//! ## Queries
//! - Get a product by id
//! - Search products
//! - List categories

mod get_product;
mod list_categories;
mod search_products;

pub use get_product::{GetProductHandler, GetProductQuery};
pub use list_categories::ListCategoriesHandler;
pub use search_products::{SearchProductsHandler, SearchProductsResult};
