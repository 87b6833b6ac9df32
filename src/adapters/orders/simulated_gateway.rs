//! Simulated order gateway.
//!
//! Stands in for the order service during local runs and tests:
//! - Draws a six-digit order number per accepted order
//! - Optional artificial latency
//! - Error injection for the next submission
//! - Records every submitted order for assertions

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::checkout::OrderNumber;
use crate::ports::{OrderGateway, OrderGatewayError, OrderReceipt, OrderRequest};

/// Simulated order service.
///
/// # Example
///
/// ```ignore
/// let gateway = SimulatedOrderGateway::new().with_latency(Duration::from_millis(500));
/// gateway.fail_next(OrderGatewayError::rejected(503, "maintenance"));
/// ```
#[derive(Default, Clone)]
pub struct SimulatedOrderGateway {
    latency: Duration,
    inner: Arc<Mutex<SimulatedState>>,
}

#[derive(Default)]
struct SimulatedState {
    next_error: Option<OrderGatewayError>,
    submitted: Vec<OrderRequest>,
}

impl SimulatedOrderGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits this long before answering each submission.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes the next submission fail with `error`.
    pub fn fail_next(&self, error: OrderGatewayError) {
        self.state().next_error = Some(error);
    }

    /// Orders accepted so far, oldest first.
    pub fn submitted_orders(&self) -> Vec<OrderRequest> {
        self.state().submitted.clone()
    }

    pub fn submission_count(&self) -> usize {
        self.state().submitted.len()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, SimulatedState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OrderGateway for SimulatedOrderGateway {
    async fn submit(&self, request: OrderRequest) -> Result<OrderReceipt, OrderGatewayError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(err) = self.state().next_error.take() {
            tracing::warn!(order_id = %request.order_id, error = %err, "Simulated order failure");
            return Err(err);
        }

        let receipt = OrderReceipt {
            order_number: OrderNumber::generate(),
            order_date: request.date,
        };
        tracing::info!(
            order_id = %request.order_id,
            order_number = %receipt.order_number,
            items = request.items.len(),
            "Simulated order accepted"
        );
        self.state().submitted.push(request);
        Ok(receipt)
    }
}
