//! RemoveItemHandler - Command handler for removing a line from the cart.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, PricingPolicy};
use crate::domain::foundation::ProductId;
use crate::domain::shopper::ShopperSession;
use crate::ports::CartStore;

/// Command to remove a product's line from the session's cart.
#[derive(Debug, Clone)]
pub struct RemoveItemCommand {
    pub session: ShopperSession,
    pub product_id: ProductId,
}

/// Removes a line. Removing a product that is not in the cart is a no-op.
pub struct RemoveItemHandler {
    store: Arc<dyn CartStore>,
    pricing: PricingPolicy,
}

impl RemoveItemHandler {
    pub fn new(store: Arc<dyn CartStore>, pricing: PricingPolicy) -> Self {
        Self { store, pricing }
    }

    pub async fn handle(&self, cmd: RemoveItemCommand) -> Result<Cart, CartError> {
        let mut removed = false;
        let cart = self
            .store
            .update(
                cmd.session.session_id(),
                self.pricing,
                Box::new(|cart: &mut Cart| removed = cart.remove_item(cmd.product_id)),
            )
            .await?;

        if !removed {
            let skipped = CartError::UnknownProduct(cmd.product_id);
            tracing::debug!(
                code = %skipped.code(),
                session_id = %cmd.session.session_id(),
                "{}",
                skipped
            );
        }
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cart::InMemoryCartStore;
    use crate::domain::catalog::Product;
    use crate::domain::foundation::Money;

    async fn seeded(store: &InMemoryCartStore, session: &ShopperSession) {
        let mut cart = Cart::default();
        cart.add_item(&Product::new(ProductId::new(1), "Mug", Money::from_cents(2899), "Ceramics").unwrap());
        cart.add_item(&Product::new(ProductId::new(2), "Blanket", Money::from_cents(7999), "Textiles").unwrap());
        store.save(session.session_id(), &cart).await.unwrap();
    }

    #[tokio::test]
    async fn removes_line_and_recomputes() {
        let store = Arc::new(InMemoryCartStore::new());
        let session = ShopperSession::anonymous();
        seeded(&store, &session).await;

        let handler = RemoveItemHandler::new(store, PricingPolicy::default());
        let cart = handler
            .handle(RemoveItemCommand {
                session,
                product_id: ProductId::new(2),
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.subtotal(), Money::from_cents(2899));
        assert_eq!(cart.shipping_fee(), Money::from_cents(599));
    }

    #[tokio::test]
    async fn absent_product_leaves_cart_unchanged() {
        let store = Arc::new(InMemoryCartStore::new());
        let session = ShopperSession::anonymous();
        seeded(&store, &session).await;

        let handler = RemoveItemHandler::new(store, PricingPolicy::default());
        let cart = handler
            .handle(RemoveItemCommand {
                session,
                product_id: ProductId::new(77),
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.subtotal(), Money::from_cents(10898));
    }
}
