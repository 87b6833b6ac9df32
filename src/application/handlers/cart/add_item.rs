//! AddItemHandler - Command handler for adding one unit of a product.

use std::sync::Arc;

use crate::domain::cart::{Cart, CartError, PricingPolicy};
use crate::domain::foundation::ProductId;
use crate::domain::shopper::ShopperSession;
use crate::ports::{CartStore, ProductCatalog};

/// Command to add one unit of a product to the session's cart.
#[derive(Debug, Clone)]
pub struct AddItemCommand {
    pub session: ShopperSession,
    pub product_id: ProductId,
}

/// Looks the product up in the catalog and adds it to the cart.
///
/// The cart itself accepts any product; availability is checked here.
pub struct AddItemHandler {
    catalog: Arc<dyn ProductCatalog>,
    store: Arc<dyn CartStore>,
    pricing: PricingPolicy,
}

impl AddItemHandler {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        store: Arc<dyn CartStore>,
        pricing: PricingPolicy,
    ) -> Self {
        Self {
            catalog,
            store,
            pricing,
        }
    }

    pub async fn handle(&self, cmd: AddItemCommand) -> Result<Cart, CartError> {
        let product = self
            .catalog
            .get(cmd.product_id)
            .await?
            .ok_or(CartError::ProductNotFound(cmd.product_id))?;

        if !product.in_stock {
            tracing::info!(product_id = %cmd.product_id, "Refused to add out-of-stock product");
            return Err(CartError::ProductUnavailable(cmd.product_id));
        }

        let cart = self
            .store
            .update(
                cmd.session.session_id(),
                self.pricing,
                Box::new(|cart: &mut Cart| cart.add_item(&product)),
            )
            .await?;

        tracing::debug!(
            session_id = %cmd.session.session_id(),
            product_id = %cmd.product_id,
            item_count = cart.item_count(),
            "Item added to cart"
        );
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cart::InMemoryCartStore;
    use crate::adapters::catalog::InMemoryProductCatalog;
    use crate::domain::cart::PricingPolicy;
    use crate::domain::foundation::{DomainError, ErrorCode, Money, SessionId};
    use crate::ports::CartMutation;
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingCartStore;

    #[async_trait]
    impl CartStore for FailingCartStore {
        async fn load(&self, _: SessionId) -> Result<Option<Cart>, DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "store offline"))
        }

        async fn save(&self, _: SessionId, _: &Cart) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "store offline"))
        }

        async fn update(
            &self,
            _: SessionId,
            _: PricingPolicy,
            _: CartMutation<'_>,
        ) -> Result<Cart, DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "store offline"))
        }

        async fn remove(&self, _: SessionId) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "store offline"))
        }
    }

    fn handler_with(store: Arc<dyn CartStore>) -> AddItemHandler {
        AddItemHandler::new(
            Arc::new(InMemoryProductCatalog::storefront().unwrap()),
            store,
            PricingPolicy::default(),
        )
    }

    fn add(session: &ShopperSession, id: u64) -> AddItemCommand {
        AddItemCommand {
            session: session.clone(),
            product_id: ProductId::new(id),
        }
    }

    #[tokio::test]
    async fn adds_catalog_product() {
        let handler = handler_with(Arc::new(InMemoryCartStore::new()));
        let session = ShopperSession::anonymous();

        let cart = handler.handle(add(&session, 1)).await.unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.subtotal(), Money::from_cents(2899));
        assert_eq!(cart.shipping_fee(), Money::from_cents(599));
    }

    #[tokio::test]
    async fn adding_twice_increments() {
        let handler = handler_with(Arc::new(InMemoryCartStore::new()));
        let session = ShopperSession::anonymous();

        handler.handle(add(&session, 1)).await.unwrap();
        let cart = handler.handle(add(&session, 1)).await.unwrap();

        assert_eq!(cart.items()[0].quantity(), 2);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let handler = handler_with(Arc::new(InMemoryCartStore::new()));
        let err = handler
            .handle(add(&ShopperSession::anonymous(), 999))
            .await
            .unwrap_err();
        assert_eq!(err, CartError::ProductNotFound(ProductId::new(999)));
    }

    #[tokio::test]
    async fn out_of_stock_product_is_refused() {
        let store = Arc::new(InMemoryCartStore::new());
        let handler = handler_with(store.clone());
        let session = ShopperSession::anonymous();

        let err = handler.handle(add(&session, 4)).await.unwrap_err();

        assert_eq!(err, CartError::ProductUnavailable(ProductId::new(4)));
        assert!(store.load(session.session_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_storage_error() {
        let handler = handler_with(Arc::new(FailingCartStore));
        let err = handler
            .handle(add(&ShopperSession::anonymous(), 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::Storage(_)));
    }
}
