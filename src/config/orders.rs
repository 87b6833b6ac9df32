//! Order service configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Order service configuration
///
/// Without an `endpoint` orders go to the simulated gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersConfig {
    /// URL orders are POSTed to
    pub endpoint: Option<String>,

    /// Bearer token for the order service
    pub api_key: Option<Secret<String>>,

    /// Deadline for one order submission, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sender address on order confirmations
    #[serde(default = "default_confirmation_from")]
    pub confirmation_from: String,

    /// Artificial latency of the simulated gateway, in milliseconds
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl OrdersConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Validate order configuration
    ///
    /// Production requires a real order service.
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        match &self.endpoint {
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                return Err(ValidationError::InvalidOrderEndpoint);
            }
            None if environment.is_production() => {
                return Err(ValidationError::MissingRequired("ORDERS__ENDPOINT"));
            }
            _ => {}
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidOrderTimeout);
        }
        if !self.confirmation_from.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            confirmation_from: default_confirmation_from(),
            simulated_latency_ms: 0,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_confirmation_from() -> String {
    "orders@artisan.example".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_outside_production() {
        let config = OrdersConfig::default();
        assert!(config.validate(Environment::Development).is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_production_requires_endpoint() {
        let config = OrdersConfig::default();
        assert!(matches!(
            config.validate(Environment::Production),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let config = OrdersConfig {
            endpoint: Some("ftp://orders.example".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidOrderEndpoint)
        ));
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let config = OrdersConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate(Environment::Development).is_err());
    }

    #[test]
    fn test_sender_needs_at_sign() {
        let config = OrdersConfig {
            confirmation_from: "orders".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidFromEmail)
        ));
    }
}
