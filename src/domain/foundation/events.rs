//! Event infrastructure for domain event publishing.
//!
//! - `EventId` - Unique identifier for events (deduplication)
//! - `EventMetadata` - Request context attached to an event
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait that all domain events must implement.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "order.placed.v1").
    fn event_type(&self) -> &'static str;

    /// Returns the schema version number.
    /// MUST match the version suffix in event_type.
    fn schema_version(&self) -> u32;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Order").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Extension trait that provides `to_envelope()` for serializable domain events.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    /// Converts this domain event into an `EventEnvelope` for transport.
    fn to_envelope(&self) -> Result<EventEnvelope, serde_json::Error> {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Implements `DomainEvent` for a struct by naming its fields.
///
/// ```ignore
/// domain_event!(
///     OrderPlaced,
///     event_type = "order.placed.v1",
///     schema_version = 1,
///     aggregate_id = order_id,
///     aggregate_type = "Order",
///     occurred_at = placed_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        schema_version = $schema_version:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $schema_version
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

/// Unique identifier for events (used for deduplication).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context of the request that produced an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Shopper session that triggered this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Transport envelope for domain events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,

    /// Event type for routing (e.g., "order.placed.v1").
    pub event_type: String,

    /// Schema version number (extracted from event_type).
    pub schema_version: u32,

    pub aggregate_id: String,

    pub aggregate_type: String,

    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,

    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Creates an envelope from a domain event, serializing it as the payload.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error when the event cannot be turned into JSON.
    pub fn from_event<T>(event: &T) -> Result<Self, serde_json::Error>
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        let payload = serde_json::to_value(event)?;
        let event_type = event.event_type().to_string();
        let schema_version = Self::extract_version(&event_type);

        Ok(Self {
            event_id: event.event_id(),
            event_type,
            schema_version,
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            payload,
            metadata: EventMetadata::default(),
        })
    }

    /// Extracts version number from an event_type like "order.placed.v2".
    ///
    /// Defaults to 1 when there is no version suffix.
    pub(crate) fn extract_version(event_type: &str) -> u32 {
        event_type
            .rsplit_once(".v")
            .and_then(|(_, version_str)| version_str.parse::<u32>().ok())
            .unwrap_or(1)
    }

    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.session_id = Some(id.into());
        self
    }

    /// Deserialize payload to a specific event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
