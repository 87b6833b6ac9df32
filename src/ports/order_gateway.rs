//! Order gateway port for submitting orders to the fulfilment service.
//!
//! The gateway receives a finished order (items, customer, total, date) and
//! answers with the public order number. Card data never crosses this port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::cart::{CartTotals, LineItem};
use crate::domain::checkout::{CustomerDetails, OrderNumber};
use crate::domain::foundation::{DomainError, ErrorCode, OrderId, Timestamp};

/// Port for the external order service.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submits an order.
    ///
    /// # Errors
    ///
    /// - `Rejected` when the service refuses the order
    /// - `Timeout` when it does not answer in time
    /// - `Transport` when it cannot be reached or answers garbage
    async fn submit(&self, request: OrderRequest) -> Result<OrderReceipt, OrderGatewayError>;
}

/// Order payload sent to the order service.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub order_id: OrderId,
    pub items: Vec<LineItem>,
    pub customer: CustomerDetails,
    pub totals: CartTotals,
    pub date: Timestamp,
}

/// Acknowledgement from the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_number: OrderNumber,
    pub order_date: Timestamp,
}

/// Errors from order submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderGatewayError {
    /// Service answered with a refusal.
    #[error("order rejected ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    /// No answer within the configured time.
    #[error("order service timed out after {after_secs}s")]
    Timeout { after_secs: u64 },

    /// Network failure or unreadable response.
    #[error("order service unreachable: {0}")]
    Transport(String),
}

impl OrderGatewayError {
    pub fn rejected(status: u16, reason: impl Into<String>) -> Self {
        OrderGatewayError::Rejected {
            status,
            reason: reason.into(),
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        OrderGatewayError::Transport(reason.into())
    }

    /// Timeouts and transport failures may succeed on retry; refusals will not.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, OrderGatewayError::Rejected { .. })
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OrderGatewayError::Rejected { .. } => ErrorCode::OrderRejected,
            OrderGatewayError::Timeout { .. } => ErrorCode::OrderTimeout,
            OrderGatewayError::Transport(_) => ErrorCode::ExternalServiceError,
        }
    }
}

impl From<OrderGatewayError> for DomainError {
    fn from(err: OrderGatewayError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
