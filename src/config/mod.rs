//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ARTISAN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use artisan_storefront::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod catalog;
mod error;
mod orders;
mod pricing;
mod server;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use orders::OrdersConfig;
pub use pricing::PricingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, environment and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// Shipping and tax rules
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Order service and confirmations
    #[serde(default)]
    pub orders: OrdersConfig,

    /// Product catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ARTISAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ARTISAN__SERVER__LISTEN_ADDR=0.0.0.0:8080` -> `server.listen_addr = "0.0.0.0:8080"`
    /// - `ARTISAN__PRICING__TAX_RATE=0.08` -> `pricing.tax_rate = 0.08`
    /// - `ARTISAN__ORDERS__ENDPOINT=...` -> `orders.endpoint = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARTISAN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.pricing.validate()?;
        self.orders.validate(self.server.environment)?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "ARTISAN__SERVER__LISTEN_ADDR",
        "ARTISAN__SERVER__ENVIRONMENT",
        "ARTISAN__PRICING__TAX_RATE",
        "ARTISAN__PRICING__FREE_SHIPPING_THRESHOLD",
        "ARTISAN__ORDERS__ENDPOINT",
        "ARTISAN__ORDERS__API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.pricing.tax_rate, Decimal::new(8, 2));
        assert!(config.orders.endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pricing_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARTISAN__PRICING__TAX_RATE", "0.1");
        env::set_var("ARTISAN__PRICING__FREE_SHIPPING_THRESHOLD", "75");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.pricing.tax_rate, Decimal::new(1, 1));
        assert_eq!(config.pricing.free_shipping_threshold, Decimal::new(75, 0));
    }

    #[test]
    fn test_order_service_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARTISAN__ORDERS__ENDPOINT", "https://orders.example/api/orders");
        env::set_var("ARTISAN__ORDERS__API_KEY", "key-123");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.orders.endpoint.as_deref(),
            Some("https://orders.example/api/orders")
        );
        assert_eq!(
            config.orders.api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("key-123")
        );
    }

    #[test]
    fn test_production_without_order_service_is_invalid() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARTISAN__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_listen_addr() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ARTISAN__SERVER__LISTEN_ADDR", "127.0.0.1:3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.socket_addr().unwrap().port(), 3000);
    }
}
