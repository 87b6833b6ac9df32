//! Checkout domain events.

use serde::{Deserialize, Serialize};

use super::order::{OrderConfirmation, OrderNumber};
use crate::domain::foundation::{EventId, Money, OrderId, SessionId, Timestamp};

/// Published once an order has been accepted by the order gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub event_id: EventId,
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    /// Session whose cart became the order.
    pub session_id: SessionId,
    pub customer_email: String,
    pub item_count: u64,
    pub total: Money,
    pub placed_at: Timestamp,
}

impl OrderPlaced {
    pub fn from_confirmation(session_id: SessionId, confirmation: &OrderConfirmation) -> Self {
        Self {
            event_id: EventId::new(),
            order_id: confirmation.order_id,
            order_number: confirmation.order_number,
            session_id,
            customer_email: confirmation.customer.email.clone(),
            item_count: confirmation.item_count,
            total: confirmation.totals.total,
            placed_at: confirmation.order_date,
        }
    }
}

crate::domain_event!(
    OrderPlaced,
    event_type = "order.placed.v1",
    schema_version = 1,
    aggregate_id = order_id,
    aggregate_type = "Order",
    occurred_at = placed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::checkout::{CheckoutForm, CustomerDetails};
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    fn placed() -> OrderPlaced {
        let confirmation = OrderConfirmation::new(
            OrderId::new(),
            OrderNumber::new(482_913).unwrap(),
            Timestamp::now(),
            &Cart::default(),
            CustomerDetails::from(&CheckoutForm::default()),
        );
        OrderPlaced::from_confirmation(SessionId::new(), &confirmation)
    }

    #[test]
    fn implements_domain_event() {
        let event = placed();
        assert_eq!(event.event_type(), "order.placed.v1");
        assert_eq!(event.aggregate_type(), "Order");
        assert_eq!(event.aggregate_id(), event.order_id.to_string());
    }

    #[test]
    fn envelope_carries_order_number() {
        let envelope = placed().to_envelope().unwrap();
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.payload["order_number"], 482_913);
    }
}
