//! Product entity as listed in the storefront catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, ProductId, ValidationError};

/// A product offered in the catalog.
///
/// # Invariants
///
/// - `name` and `category` are non-empty
/// - `price` is non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    /// Average review rating (0.0 to 5.0).
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Creates an in-stock product with the required fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name or category is empty, or the
    /// price is negative.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let product = Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            image: String::new(),
            in_stock: true,
            featured: false,
            rating: 0.0,
            review_count: 0,
            tags: Vec::new(),
        };
        product.validate()?;
        Ok(product)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.review_count = review_count;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn sold_out(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Checks the invariants; used after deserializing catalog seed data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        Money::try_price(self.price.amount())?;
        Ok(())
    }
}
