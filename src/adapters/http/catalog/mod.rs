//! HTTP adapter for catalog endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CategoryListResponse, ProductHitResponse, ProductListResponse, ProductResponse,
    ProductSearchParams,
};
pub use routes::catalog_routes;
