//! Listener and runtime settings for the storefront API

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Longest request the storefront will hold open, order submission included.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// `host:port` the API listens on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default)]
    pub environment: Environment,

    /// Fallback filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Shop front-ends allowed to call the API, comma-separated.
    /// Any origin is allowed when unset.
    pub allowed_origins: Option<String>,
}

/// Deployment the storefront runs in
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl ServerConfig {
    /// Parsed listen address; port 0 is refused.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr: SocketAddr = self
            .listen_addr
            .parse()
            .map_err(|_| ValidationError::InvalidAddress(self.listen_addr.clone()))?;
        if addr.port() == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(addr)
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .iter()
            .flat_map(|origins| origins.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            allowed_origins: None,
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_log_level() -> String {
    "info,artisan_storefront=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
