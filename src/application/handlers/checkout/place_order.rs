//! PlaceOrderHandler - Command handler for turning a cart into an order.
//!
//! Order of operations:
//! 1. Validate every checkout step
//! 2. Claim the session's cart; an empty or already claimed cart is refused
//! 3. Submit the claimed snapshot to the order gateway under a deadline;
//!    on any failure the claim is released and the cart is left as it was
//! 4. Take the ordered quantities out of the cart and notify the customer
//! 5. Publish `OrderPlaced`
//!
//! Nothing after a successful submission undoes the order: notification
//! and publishing failures are logged and the confirmation is returned.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::cart::{Cart, CartError, PricingPolicy};
use crate::domain::checkout::{
    validate_form, CheckoutError, CheckoutForm, CustomerDetails, OrderConfirmation, OrderPlaced,
};
use crate::domain::foundation::{
    EventEnvelope, OrderId, SerializableDomainEvent, SessionId, Timestamp,
};
use crate::domain::shopper::ShopperSession;
use crate::ports::{
    CartStore, ConfirmationNotifier, EventPublisher, OrderGateway, OrderGatewayError, OrderRequest,
};

/// Default deadline for the order service.
pub const DEFAULT_ORDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Command to place the session's cart as an order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    pub session: ShopperSession,
    pub form: CheckoutForm,
}

/// Result of successful order placement.
///
/// `event` is `None` when `OrderPlaced` could not be serialized; the order
/// itself still stands.
#[derive(Debug, Clone)]
pub struct PlaceOrderResult {
    pub confirmation: OrderConfirmation,
    pub event: Option<EventEnvelope>,
}

/// Handler for placing orders.
pub struct PlaceOrderHandler {
    store: Arc<dyn CartStore>,
    gateway: Arc<dyn OrderGateway>,
    notifier: Arc<dyn ConfirmationNotifier>,
    publisher: Arc<dyn EventPublisher>,
    pricing: PricingPolicy,
    order_timeout: Duration,
}

impl PlaceOrderHandler {
    pub fn new(
        store: Arc<dyn CartStore>,
        gateway: Arc<dyn OrderGateway>,
        notifier: Arc<dyn ConfirmationNotifier>,
        publisher: Arc<dyn EventPublisher>,
        pricing: PricingPolicy,
    ) -> Self {
        Self {
            store,
            gateway,
            notifier,
            publisher,
            pricing,
            order_timeout: DEFAULT_ORDER_TIMEOUT,
        }
    }

    pub fn with_order_timeout(mut self, timeout: Duration) -> Self {
        self.order_timeout = timeout;
        self
    }

    pub async fn handle(&self, cmd: PlaceOrderCommand) -> Result<PlaceOrderResult, CheckoutError> {
        validate_form(&cmd.form).map_err(|(step, errors)| CheckoutError::validation(step, errors))?;

        let session_id = cmd.session.session_id();
        let order_id = OrderId::new();
        let cart = self.claim_cart(session_id, order_id).await?;

        let customer = CustomerDetails::from(&cmd.form);
        let request = OrderRequest {
            order_id,
            items: cart.items().to_vec(),
            customer: customer.clone(),
            totals: *cart.totals(),
            date: Timestamp::now(),
        };

        let receipt = match tokio::time::timeout(self.order_timeout, self.gateway.submit(request)).await
        {
            Ok(Ok(receipt)) => receipt,
            Ok(Err(err)) => {
                tracing::warn!(order_id = %order_id, error = %err, "Order submission failed");
                self.release_cart(session_id, order_id).await;
                return Err(gateway_error(err));
            }
            Err(_) => {
                tracing::warn!(
                    order_id = %order_id,
                    timeout_secs = self.order_timeout.as_secs(),
                    "Order submission timed out"
                );
                self.release_cart(session_id, order_id).await;
                return Err(CheckoutError::OrderTimeout {
                    after_secs: self.order_timeout.as_secs(),
                });
            }
        };

        let confirmation = OrderConfirmation::new(
            order_id,
            receipt.order_number,
            receipt.order_date,
            &cart,
            customer,
        );

        let ordered = cart.items();
        let mut completed = false;
        let remaining = self
            .store
            .update(
                session_id,
                self.pricing,
                Box::new(|current: &mut Cart| {
                    completed = current.complete_checkout(order_id, ordered);
                }),
            )
            .await;
        match remaining {
            Ok(_) if !completed => tracing::warn!(
                order_id = %order_id,
                "Cart lost its checkout claim before the order completed"
            ),
            Ok(_) => {}
            Err(err) => tracing::error!(
                order_id = %order_id,
                error = %err,
                "Placed order could not be taken out of the cart"
            ),
        }

        if let Err(err) = self
            .notifier
            .send_confirmation(&confirmation.customer.email, &confirmation)
            .await
        {
            tracing::warn!(
                order_number = %confirmation.order_number,
                error = %err,
                "Order confirmation could not be sent"
            );
        }

        let event = match OrderPlaced::from_confirmation(session_id, &confirmation).to_envelope() {
            Ok(envelope) => Some(envelope.with_session_id(session_id.to_string())),
            Err(err) => {
                tracing::error!(
                    order_number = %confirmation.order_number,
                    error = %err,
                    "OrderPlaced could not be serialized"
                );
                None
            }
        };
        if let Some(event) = &event {
            if let Err(err) = self.publisher.publish(event.clone()).await {
                tracing::error!(
                    order_number = %confirmation.order_number,
                    error = %err,
                    "Failed to publish OrderPlaced"
                );
            }
        }

        tracing::info!(
            order_id = %order_id,
            order_number = %confirmation.order_number,
            total = %confirmation.totals.total,
            "Order placed"
        );

        Ok(PlaceOrderResult {
            confirmation,
            event,
        })
    }
}

impl PlaceOrderHandler {
    /// Claims the cart for `order_id` inside the store's lock and returns
    /// the snapshot being ordered.
    async fn claim_cart(&self, session: SessionId, order_id: OrderId) -> Result<Cart, CheckoutError> {
        let mut claimed: Result<Cart, CartError> = Err(CartError::EmptyCart);
        self.store
            .update(
                session,
                self.pricing,
                Box::new(|cart: &mut Cart| claimed = cart.begin_checkout(order_id)),
            )
            .await?;
        claimed.map_err(|err| {
            tracing::info!(session_id = %session, order_id = %order_id, reason = %err, "Checkout refused");
            CheckoutError::from(err)
        })
    }

    /// Drops the claim so the shopper can retry with the same cart.
    async fn release_cart(&self, session: SessionId, order_id: OrderId) {
        let released = self
            .store
            .update(
                session,
                self.pricing,
                Box::new(|cart: &mut Cart| {
                    cart.release_checkout(order_id);
                }),
            )
            .await;
        if let Err(err) = released {
            tracing::error!(
                order_id = %order_id,
                error = %err,
                "Checkout claim could not be released"
            );
        }
    }
}

fn gateway_error(err: OrderGatewayError) -> CheckoutError {
    match err {
        OrderGatewayError::Rejected { reason, .. } => CheckoutError::OrderRejected(reason),
        OrderGatewayError::Timeout { after_secs } => CheckoutError::OrderTimeout { after_secs },
        OrderGatewayError::Transport(reason) => CheckoutError::OrderService(reason),
    }
}
