//! In-memory cart store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::cart::{Cart, PricingPolicy};
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::{CartMutation, CartStore};

/// Carts held in process memory, one per session.
///
/// A single async lock guards the whole map, so every `update` is atomic.
/// A cart is dropped from the map as soon as it becomes idle, so sessions
/// that empty their cart or complete an order leave nothing behind.
#[derive(Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<SessionId, Cart>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with a stored cart.
    pub async fn session_count(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self, session: SessionId) -> Result<Option<Cart>, DomainError> {
        Ok(self.carts.read().await.get(&session).cloned())
    }

    async fn save(&self, session: SessionId, cart: &Cart) -> Result<(), DomainError> {
        let mut carts = self.carts.write().await;
        if cart.is_idle() {
            carts.remove(&session);
        } else {
            carts.insert(session, cart.clone());
        }
        Ok(())
    }

    async fn update(
        &self,
        session: SessionId,
        pricing: PricingPolicy,
        mutate: CartMutation<'_>,
    ) -> Result<Cart, DomainError> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(session).or_insert_with(|| Cart::new(pricing));
        mutate(cart);
        let updated = cart.clone();
        if updated.is_idle() {
            carts.remove(&session);
        }
        Ok(updated)
    }

    async fn remove(&self, session: SessionId) -> Result<(), DomainError> {
        self.carts.write().await.remove(&session);
        Ok(())
    }
}
