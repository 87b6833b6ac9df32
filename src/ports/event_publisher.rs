//! EventPublisher port - Interface for publishing domain events.
//!
//! Handlers publish envelopes here without knowing the transport.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations deliver at-least-once and propagate failures to the caller.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
