//! UpdateQuantityHandler - Command handler for setting a line's quantity.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, PricingPolicy, QuantityInput};
use crate::domain::foundation::ProductId;
use crate::domain::shopper::ShopperSession;
use crate::ports::CartStore;

/// Command to set the quantity of a product already in the cart.
#[derive(Debug, Clone)]
pub struct UpdateQuantityCommand {
    pub session: ShopperSession,
    pub product_id: ProductId,
    pub quantity: QuantityInput,
}

/// Sets a line's quantity to `max(1, requested)`.
///
/// Unreadable quantities fall back to 1. Products not in the cart are
/// ignored. Both cases are logged and never fail the request.
pub struct UpdateQuantityHandler {
    store: Arc<dyn CartStore>,
    pricing: PricingPolicy,
}

impl UpdateQuantityHandler {
    pub fn new(store: Arc<dyn CartStore>, pricing: PricingPolicy) -> Self {
        Self { store, pricing }
    }

    pub async fn handle(&self, cmd: UpdateQuantityCommand) -> Result<Cart, CartError> {
        let requested = match cmd.quantity.coerce() {
            Ok(n) => n,
            Err(err) => {
                tracing::warn!(
                    code = %err.code(),
                    product_id = %cmd.product_id,
                    "{}; using 1",
                    err
                );
                1
            }
        };

        let mut applied = false;
        let cart = self
            .store
            .update(
                cmd.session.session_id(),
                self.pricing,
                Box::new(|cart: &mut Cart| {
                    applied = cart.update_quantity(cmd.product_id, requested)
                }),
            )
            .await?;

        if !applied {
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
    use serde_json::json;

    async fn handler_with_mug(session: &ShopperSession) -> UpdateQuantityHandler {
        let store = Arc::new(InMemoryCartStore::new());
        let mut cart = Cart::default();
        cart.add_item(&Product::new(ProductId::new(1), "Mug", Money::from_cents(2899), "Ceramics").unwrap());
        store.save(session.session_id(), &cart).await.unwrap();
        UpdateQuantityHandler::new(store, PricingPolicy::default())
    }

    fn cmd(session: &ShopperSession, id: u64, quantity: serde_json::Value) -> UpdateQuantityCommand {
        UpdateQuantityCommand {
            session: session.clone(),
            product_id: ProductId::new(id),
            quantity: serde_json::from_value(quantity).unwrap(),
        }
    }

    #[tokio::test]
    async fn sets_quantity_and_recomputes() {
        let session = ShopperSession::anonymous();
        let handler = handler_with_mug(&session).await;

        let cart = handler.handle(cmd(&session, 1, json!(2))).await.unwrap();

        assert_eq!(cart.items()[0].quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_cents(5798));
        assert_eq!(cart.shipping_fee(), Money::ZERO);
    }

    #[tokio::test]
    async fn zero_clamps_to_one() {
        let session = ShopperSession::anonymous();
        let handler = handler_with_mug(&session).await;

        let cart = handler.handle(cmd(&session, 1, json!(0))).await.unwrap();
        assert_eq!(cart.items()[0].quantity(), 1);
    }

    #[tokio::test]
    async fn garbage_quantity_falls_back_to_one() {
        let session = ShopperSession::anonymous();
        let handler = handler_with_mug(&session).await;
        handler.handle(cmd(&session, 1, json!(5))).await.unwrap();

        let cart = handler.handle(cmd(&session, 1, json!("lots"))).await.unwrap();
        assert_eq!(cart.items()[0].quantity(), 1);
    }

    #[tokio::test]
    async fn numeric_string_is_accepted() {
        let session = ShopperSession::anonymous();
        let handler = handler_with_mug(&session).await;

        let cart = handler.handle(cmd(&session, 1, json!("3"))).await.unwrap();
        assert_eq!(cart.items()[0].quantity(), 3);
    }

    #[tokio::test]
    async fn unknown_product_is_ignored() {
        let session = ShopperSession::anonymous();
        let handler = handler_with_mug(&session).await;

        let cart = handler.handle(cmd(&session, 42, json!(4))).await.unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity(), 1);
    }
}
