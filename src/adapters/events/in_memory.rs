//! In-memory event bus.
//!
//! Keeps every published envelope in process memory and logs it. Used by the
//! server binary (the storefront has no external broker) and by tests for
//! assertions.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("order.placed.v1"));
/// ```
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
        }
    }

    /// Returns all published events, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            "Domain event published"
        );
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}
