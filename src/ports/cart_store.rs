//! Cart store port.
//!
//! Holds one cart per shopper session. The store owns no pricing logic: a
//! loaded cart already carries its totals.

use async_trait::async_trait;

use crate::domain::cart::{Cart, PricingPolicy};
use crate::domain::foundation::{DomainError, SessionId};

/// A change applied to a cart while the store holds it locked.
pub type CartMutation<'a> = Box<dyn FnOnce(&mut Cart) + Send + 'a>;

/// Persistence for shopper carts, keyed by session.
///
/// Each call sees a consistent cart: a `save` is visible in full to the
/// next `load` for that session. An idle cart (no lines, no checkout claim)
/// need not be kept; `load` then returns `None`.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns the session's cart, or `None` if it has never been saved.
    async fn load(&self, session: SessionId) -> Result<Option<Cart>, DomainError>;

    /// Stores the cart, replacing any previous one for the session.
    async fn save(&self, session: SessionId, cart: &Cart) -> Result<(), DomainError>;

    /// Applies `mutate` to the session's cart atomically and stores the result.
    ///
    /// A session without a cart starts from an empty one priced by `pricing`.
    /// Returns the cart as it was after the mutation.
    async fn update(
        &self,
        session: SessionId,
        pricing: PricingPolicy,
        mutate: CartMutation<'_>,
    ) -> Result<Cart, DomainError>;

    /// Forgets the session's cart. Removing a missing cart is not an error.
    async fn remove(&self, session: SessionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn CartStore) {}
    }
}
