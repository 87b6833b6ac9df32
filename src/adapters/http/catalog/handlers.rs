//! HTTP handlers for catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, error_response, ErrorResponse};
use crate::adapters::http::StorefrontAppState;
use crate::application::handlers::GetProductQuery;
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ProductId;

use super::dto::{CategoryListResponse, ProductListResponse, ProductResponse, ProductSearchParams};

/// GET /api/products - Search and filter the catalog
pub async fn search_products(
    State(state): State<StorefrontAppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = match ProductSearchParams::from_pairs(pairs) {
        Ok(params) => params,
        Err(message) => return bad_request(message),
    };

    match state.search_products_handler().handle(params.into_query()).await {
        Ok(result) => {
            let response = ProductListResponse {
                total: result.total,
                products: result.products.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/products/:id - Get one product
pub async fn get_product(
    State(state): State<StorefrontAppState>,
    Path(product_id): Path<String>,
) -> Response {
    let product_id = match product_id.parse::<ProductId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid product ID"),
    };

    match state
        .get_product_handler()
        .handle(GetProductQuery { product_id })
        .await
    {
        Ok(product) => (StatusCode::OK, Json(ProductResponse::from(product))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/categories - List categories in catalog order
pub async fn list_categories(State(state): State<StorefrontAppState>) -> Response {
    match state.list_categories_handler().handle().await {
        Ok(categories) => {
            (StatusCode::OK, Json(CategoryListResponse { categories })).into_response()
        }
        Err(e) => handle_catalog_error(e),
    }
}

fn handle_catalog_error(error: CatalogError) -> Response {
    let code = error.code();
    error_response(ErrorResponse::new(code, error.message()), code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_catalog_error(CatalogError::not_found(ProductId::new(99)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let response = handle_catalog_error(CatalogError::Storage("offline".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
