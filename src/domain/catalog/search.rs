//! Catalog search: filtering and relevance scoring.
//!
//! Matching is a case-insensitive substring test over name, description,
//! category and tags. Scores weight name hits above description, category
//! and tag hits; exact name and tag matches earn a bonus.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

const NAME_MATCH: u32 = 5;
const EXACT_NAME_BONUS: u32 = 5;
const DESCRIPTION_MATCH: u32 = 3;
const CATEGORY_MATCH: u32 = 2;
const TAG_MATCH: u32 = 1;
const EXACT_TAG_BONUS: u32 = 2;

/// Optional narrowing applied before text matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Only products in one of these categories. Empty means any category.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Inclusive price bounds `(min, max)`; a max of zero means no upper bound.
    #[serde(default)]
    pub price_range: Option<(Decimal, Decimal)>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.price_range.is_none()
    }

    fn admits(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if let Some((min, max)) = self.price_range {
            let price = product.price.amount();
            if price < min || (max > Decimal::ZERO && price > max) {
                return false;
            }
        }
        true
    }
}

/// A text query plus filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub filters: SearchFilters,
}

impl SearchQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filters: SearchFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    fn normalized(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

/// A matching product and its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub relevance_score: u32,
}

/// Runs a query over a product list.
///
/// With no text and no filters, every product is returned in catalog order.
/// Otherwise results are ordered by descending score; ties keep catalog order.
pub fn search<'a, I>(products: I, query: &SearchQuery) -> Vec<ScoredProduct>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = query.normalized();

    let mut hits: Vec<ScoredProduct> = products
        .into_iter()
        .filter(|p| query.filters.admits(p))
        .filter(|p| needle.is_empty() || matches(p, &needle))
        .map(|p| ScoredProduct {
            relevance_score: if needle.is_empty() { 1 } else { score(p, &needle) },
            product: p.clone(),
        })
        .collect();

    // sort_by is stable, so equal scores stay in catalog order
    hits.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    hits
}

fn matches(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

fn score(product: &Product, needle: &str) -> u32 {
    let mut score = 0;

    let name = product.name.to_lowercase();
    if name.contains(needle) {
        score += NAME_MATCH;
        if name == needle {
            score += EXACT_NAME_BONUS;
        }
    }
    if product.description.to_lowercase().contains(needle) {
        score += DESCRIPTION_MATCH;
    }
    if product.category.to_lowercase().contains(needle) {
        score += CATEGORY_MATCH;
    }
    for tag in &product.tags {
        let tag = tag.to_lowercase();
        if tag.contains(needle) {
            score += TAG_MATCH;
        }
        if tag == needle {
            score += EXACT_TAG_BONUS;
        }
    }

    score
}
