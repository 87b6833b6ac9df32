//! ClearCartHandler - Command handler for emptying the cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, PricingPolicy};
use crate::domain::shopper::ShopperSession;
use crate::ports::CartStore;

/// Command to empty the session's cart.
#[derive(Debug, Clone)]
pub struct ClearCartCommand {
    pub session: ShopperSession,
}

pub struct ClearCartHandler {
    store: Arc<dyn CartStore>,
    pricing: PricingPolicy,
}

impl ClearCartHandler {
    pub fn new(store: Arc<dyn CartStore>, pricing: PricingPolicy) -> Self {
        Self { store, pricing }
    }

    pub async fn handle(&self, cmd: ClearCartCommand) -> Result<Cart, CartError> {
        let cart = self
            .store
            .update(
                cmd.session.session_id(),
                self.pricing,
                Box::new(|cart: &mut Cart| cart.clear()),
            )
            .await?;
        tracing::debug!(session_id = %cmd.session.session_id(), "Cart cleared");
        Ok(cart)
    }
}
