//! Order gateway adapters.

mod http_gateway;
mod simulated_gateway;

pub use http_gateway::{HttpOrderGateway, HttpOrderGatewayConfig};
pub use simulated_gateway::SimulatedOrderGateway;
