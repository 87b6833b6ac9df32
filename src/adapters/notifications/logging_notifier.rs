//! Confirmation notifier that writes confirmations to the log.
//!
//! The storefront has no mail transport; confirmations are logged with the
//! fields an email would carry and kept in memory for inspection.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::domain::checkout::{OrderConfirmation, OrderNumber};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ConfirmationNotifier;

/// A confirmation that was "sent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentConfirmation {
    pub to: String,
    pub from: String,
    pub order_number: OrderNumber,
}

/// Logs order confirmations instead of emailing them.
pub struct LoggingConfirmationNotifier {
    from: String,
    sent: Mutex<Vec<SentConfirmation>>,
    fail_sends: bool,
}

impl LoggingConfirmationNotifier {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            sent: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    /// A notifier whose every send fails, for exercising failure handling.
    pub fn failing(from: impl Into<String>) -> Self {
        Self {
            fail_sends: true,
            ..Self::new(from)
        }
    }

    pub fn sent(&self) -> Vec<SentConfirmation> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ConfirmationNotifier for LoggingConfirmationNotifier {
    async fn send_confirmation(
        &self,
        email: &str,
        confirmation: &OrderConfirmation,
    ) -> Result<(), DomainError> {
        if self.fail_sends {
            return Err(DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Could not deliver confirmation to {}", email),
            ));
        }

        tracing::info!(
            to = %email,
            from = %self.from,
            order_number = %confirmation.order_number,
            total = %confirmation.totals.total,
            estimated_delivery = %confirmation.estimated_delivery.as_datetime().format("%Y-%m-%d"),
            "Order confirmation sent"
        );

        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentConfirmation {
                to: email.to_string(),
                from: self.from.clone(),
                order_number: confirmation.order_number,
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::checkout::{CheckoutForm, CustomerDetails};
    use crate::domain::foundation::{OrderId, Timestamp};

    fn confirmation() -> OrderConfirmation {
        OrderConfirmation::new(
            OrderId::new(),
            OrderNumber::new(555_555).unwrap(),
            Timestamp::now(),
            &Cart::default(),
            CustomerDetails::from(&CheckoutForm::default()),
        )
    }

    #[tokio::test]
    async fn records_sent_confirmation() {
        let notifier = LoggingConfirmationNotifier::new("orders@artisan.example");
        notifier
            .send_confirmation("ada@example.com", &confirmation())
            .await
            .unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].order_number.value(), 555_555);
    }

    #[tokio::test]
    async fn failing_notifier_errors() {
        let notifier = LoggingConfirmationNotifier::failing("orders@artisan.example");
        let err = notifier
            .send_confirmation("ada@example.com", &confirmation())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(notifier.sent().is_empty());
    }
}
