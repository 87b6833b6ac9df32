//! Shopper session context.
//!
//! Every cart operation runs on behalf of one shopper session; the session
//! is passed explicitly instead of living in ambient state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

/// The shopper a request acts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopperSession {
    session_id: SessionId,
    customer_email: Option<String>,
}

impl ShopperSession {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            customer_email: None,
        }
    }

    /// Starts a session with a fresh id.
    pub fn anonymous() -> Self {
        Self::new(SessionId::new())
    }

    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.customer_email = if email.trim().is_empty() {
            None
        } else {
            Some(email.trim().to_string())
        };
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.customer_email.as_deref()
    }
}
