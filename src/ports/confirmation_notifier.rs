//! Confirmation notifier port.
//!
//! Sends the order confirmation to the customer after an order is accepted.

use async_trait::async_trait;

use crate::domain::checkout::OrderConfirmation;
use crate::domain::foundation::DomainError;

/// Delivers order confirmations (email or similar).
///
/// A failed send does not undo the order; callers log and move on.
#[async_trait]
pub trait ConfirmationNotifier: Send + Sync {
    async fn send_confirmation(
        &self,
        email: &str,
        confirmation: &OrderConfirmation,
    ) -> Result<(), DomainError>;
}
