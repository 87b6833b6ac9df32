//! HTTP DTOs for catalog endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::catalog::{Product, ScoredProduct, SearchFilters, SearchQuery};
use crate::domain::foundation::Money;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for `GET /api/products`.
///
/// `category` may repeat or hold a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearchParams {
    pub q: String,
    pub categories: Vec<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ProductSearchParams {
    /// Builds params from raw query pairs.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first price that is not a number.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, String> {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = value,
                "category" => params.categories.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string),
                ),
                "min_price" => params.min_price = Some(parse_price("min_price", &value)?),
                "max_price" => params.max_price = Some(parse_price("max_price", &value)?),
                _ => {}
            }
        }
        Ok(params)
    }

    pub fn into_query(self) -> SearchQuery {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(Decimal::ZERO), max.unwrap_or(Decimal::ZERO))),
        };
        SearchQuery::text(self.q).with_filters(SearchFilters {
            categories: self.categories,
            price_range,
        })
    }
}

fn parse_price(field: &str, raw: &str) -> Result<Decimal, String> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| format!("{} must be a number, got '{}'", field, raw))
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Product as shown to shoppers.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub image: String,
    pub in_stock: bool,
    pub featured: bool,
    pub rating: f32,
    pub review_count: u32,
    pub tags: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
            in_stock: product.in_stock,
            featured: product.featured,
            rating: product.rating,
            review_count: product.review_count,
            tags: product.tags,
        }
    }
}

/// A search hit.
#[derive(Debug, Clone, Serialize)]
pub struct ProductHitResponse {
    #[serde(flatten)]
    pub product: ProductResponse,
    pub relevance_score: u32,
}

impl From<ScoredProduct> for ProductHitResponse {
    fn from(scored: ScoredProduct) -> Self {
        Self {
            product: scored.product.into(),
            relevance_score: scored.relevance_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductHitResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn categories_accept_repeats_and_commas() {
        let params = ProductSearchParams::from_pairs(pairs(&[
            ("category", "Ceramics, Textiles"),
            ("category", "Jewelry"),
        ]))
        .unwrap();

        assert_eq!(params.categories, vec!["Ceramics", "Textiles", "Jewelry"]);
    }

    #[test]
    fn max_only_range_starts_at_zero() {
        let query = ProductSearchParams::from_pairs(pairs(&[("max_price", "30")]))
            .unwrap()
            .into_query();

        assert_eq!(
            query.filters.price_range,
            Some((Decimal::ZERO, Decimal::new(30, 0)))
        );
    }

    #[test]
    fn no_prices_means_no_range() {
        let query = ProductSearchParams::from_pairs(pairs(&[("q", "bowl")]))
            .unwrap()
            .into_query();

        assert_eq!(query.text, "bowl");
        assert!(query.filters.price_range.is_none());
    }

    #[test]
    fn bad_price_is_reported() {
        let err = ProductSearchParams::from_pairs(pairs(&[("min_price", "cheap")])).unwrap_err();
        assert!(err.contains("min_price"));
    }
}
