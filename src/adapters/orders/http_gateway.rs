//! HTTP order gateway.
//!
//! POSTs the order as JSON to the order service and reads back the order
//! number. Any non-2xx answer is a rejection.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::checkout::OrderNumber;
use crate::domain::foundation::Timestamp;
use crate::ports::{OrderGateway, OrderGatewayError, OrderReceipt, OrderRequest};

/// Configuration for the HTTP order gateway.
#[derive(Debug, Clone)]
pub struct HttpOrderGatewayConfig {
    /// Full URL orders are POSTed to.
    pub endpoint: String,
    /// Sent as a bearer token when present.
    api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl HttpOrderGatewayConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Order service response body. Accepts snake_case or camelCase keys.
#[derive(Debug, Deserialize)]
struct OrderServiceResponse {
    #[serde(alias = "orderNumber")]
    order_number: u32,
    #[serde(alias = "orderDate", default)]
    order_date: Option<Timestamp>,
}

/// Order gateway backed by an HTTP order service.
pub struct HttpOrderGateway {
    config: HttpOrderGatewayConfig,
    client: Client,
}

impl HttpOrderGateway {
    /// # Errors
    ///
    /// `Transport` if the HTTP client cannot be built.
    pub fn new(config: HttpOrderGatewayConfig) -> Result<Self, OrderGatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OrderGatewayError::transport(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self { config, client })
    }

    fn map_send_error(&self, err: reqwest::Error) -> OrderGatewayError {
        if err.is_timeout() {
            OrderGatewayError::Timeout {
                after_secs: self.config.timeout.as_secs(),
            }
        } else if err.is_connect() {
            OrderGatewayError::transport(format!("Connection failed: {}", err))
        } else {
            OrderGatewayError::transport(err.to_string())
        }
    }

    async fn check_status(response: Response) -> Result<Response, OrderGatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(OrderGatewayError::rejected(status.as_u16(), body))
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn submit(&self, request: OrderRequest) -> Result<OrderReceipt, OrderGatewayError> {
        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;
        let response = Self::check_status(response).await?;

        let body: OrderServiceResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.map_send_error(e)
            } else {
                OrderGatewayError::transport(format!("Unreadable order response: {}", e))
            }
        })?;
        let order_number = OrderNumber::new(body.order_number)
            .map_err(|e| OrderGatewayError::transport(e.to_string()))?;

        tracing::info!(
            order_id = %request.order_id,
            order_number = %order_number,
            "Order accepted by order service"
        );

        Ok(OrderReceipt {
            order_number,
            order_date: body.order_date.unwrap_or(request.date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::checkout::{CheckoutForm, CustomerDetails};
    use crate::domain::foundation::OrderId;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/orders", addr)
    }

    fn request() -> OrderRequest {
        let cart = Cart::default();
        OrderRequest {
            order_id: OrderId::new(),
            items: cart.items().to_vec(),
            customer: CustomerDetails::from(&CheckoutForm::default()),
            totals: *cart.totals(),
            date: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn accepted_order_returns_number() {
        let url = serve(Router::new().route(
            "/orders",
            post(|| async { Json(json!({ "orderNumber": 482913 })) }),
        ))
        .await;

        let gateway = HttpOrderGateway::new(HttpOrderGatewayConfig::new(url)).unwrap();
        let req = request();
        let date = req.date;
        let receipt = gateway.submit(req).await.unwrap();

        assert_eq!(receipt.order_number.value(), 482_913);
        assert_eq!(receipt.order_date, date);
    }

    #[tokio::test]
    async fn api_key_sent_as_bearer() {
        let url = serve(Router::new().route(
            "/orders",
            post(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                if auth == "Bearer sekrit" {
                    (StatusCode::OK, Json(json!({ "order_number": 100001 })))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({})))
                }
            }),
        ))
        .await;

        let gateway =
            HttpOrderGateway::new(HttpOrderGatewayConfig::new(url).with_api_key("sekrit")).unwrap();
        assert!(gateway.submit(request()).await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_rejection() {
        let url = serve(Router::new().route(
            "/orders",
            post(|_: Json<Value>| async { (StatusCode::UNPROCESSABLE_ENTITY, "bad address") }),
        ))
        .await;

        let gateway = HttpOrderGateway::new(HttpOrderGatewayConfig::new(url)).unwrap();
        let err = gateway.submit(request()).await.unwrap_err();
        assert_eq!(err, OrderGatewayError::rejected(422, "bad address"));
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let url = serve(Router::new().route(
            "/orders",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "order_number": 100001 }))
            }),
        ))
        .await;

        let gateway = HttpOrderGateway::new(
            HttpOrderGatewayConfig::new(url).with_timeout(Duration::from_millis(100)),
        )
        .unwrap();
        let err = gateway.submit(request()).await.unwrap_err();
        assert!(matches!(err, OrderGatewayError::Timeout { .. }));
    }

    #[tokio::test]
    async fn out_of_range_order_number_is_transport_error() {
        let url = serve(Router::new().route(
            "/orders",
            post(|| async { Json(json!({ "order_number": 12 })) }),
        ))
        .await;

        let gateway = HttpOrderGateway::new(HttpOrderGatewayConfig::new(url)).unwrap();
        let err = gateway.submit(request()).await.unwrap_err();
        assert!(matches!(err, OrderGatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway =
            HttpOrderGateway::new(HttpOrderGatewayConfig::new(format!("http://{}/orders", addr)))
                .unwrap();
        let err = gateway.submit(request()).await.unwrap_err();
        assert!(matches!(err, OrderGatewayError::Transport(_)));
    }
}
