//! GetCartHandler - Query handler for the shopper's current cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, PricingPolicy};
use crate::domain::shopper::ShopperSession;
use crate::ports::CartStore;

/// Query for a session's cart.
#[derive(Debug, Clone)]
pub struct GetCartQuery {
    pub session: ShopperSession,
}

/// Returns the stored cart, or an empty one when the session has none yet.
pub struct GetCartHandler {
    store: Arc<dyn CartStore>,
    pricing: PricingPolicy,
}

impl GetCartHandler {
    pub fn new(store: Arc<dyn CartStore>, pricing: PricingPolicy) -> Self {
        Self { store, pricing }
    }

    pub async fn handle(&self, query: GetCartQuery) -> Result<Cart, CartError> {
        let cart = self
            .store
            .load(query.session.session_id())
            .await?
            .unwrap_or_else(|| Cart::new(self.pricing));
        Ok(cart)
    }
}
