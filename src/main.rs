//! Artisan Storefront server binary.
//!
//! Loads configuration from the environment, wires adapters into the HTTP
//! router and serves until Ctrl-C or SIGTERM.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use http::{header, HeaderName, HeaderValue, Method};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use artisan_storefront::adapters::catalog::{load_catalog_file, InMemoryProductCatalog};
use artisan_storefront::adapters::http::{storefront_router, StorefrontAppState, SESSION_HEADER};
use artisan_storefront::adapters::{
    HttpOrderGateway, HttpOrderGatewayConfig, InMemoryCartStore, InMemoryEventBus,
    LoggingConfirmationNotifier, SimulatedOrderGateway,
};
use artisan_storefront::config::{AppConfig, ServerConfig};
use artisan_storefront::ports::{OrderGateway, ProductCatalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    info!(environment = ?config.server.environment, "Initializing state...");
    let state = build_state(&config)?;

    let app = storefront_router(state)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    info!(%address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_state(config: &AppConfig) -> Result<StorefrontAppState, Box<dyn Error>> {
    let catalog: Arc<dyn ProductCatalog> = match &config.catalog.seed_path {
        Some(path) => Arc::new(load_catalog_file(path)?),
        None => Arc::new(InMemoryProductCatalog::storefront()?),
    };

    let orders = &config.orders;
    let gateway: Arc<dyn OrderGateway> = match &orders.endpoint {
        Some(endpoint) => {
            let mut gateway_config =
                HttpOrderGatewayConfig::new(endpoint.clone()).with_timeout(orders.timeout());
            if let Some(api_key) = &orders.api_key {
                gateway_config = gateway_config.with_api_key(api_key.expose_secret().clone());
            }
            info!(%endpoint, "Using HTTP order gateway");
            Arc::new(HttpOrderGateway::new(gateway_config)?)
        }
        None => {
            info!("No order endpoint configured, using simulated order gateway");
            Arc::new(SimulatedOrderGateway::new().with_latency(orders.simulated_latency()))
        }
    };

    let state = StorefrontAppState::new(
        catalog,
        Arc::new(InMemoryCartStore::new()),
        gateway,
        Arc::new(LoggingConfirmationNotifier::new(
            orders.confirmation_from.clone(),
        )),
        Arc::new(InMemoryEventBus::new()),
    )
    .with_pricing(config.pricing.to_policy()?)
    .with_order_timeout(orders.timeout());

    Ok(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let session_header = HeaderName::from_static(SESSION_HEADER);
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, session_header.clone()])
        .expose_headers([session_header])
        .max_age(Duration::from_secs(60 * 60))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
