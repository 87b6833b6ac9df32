//! Shopper session middleware and extractor.
//!
//! Carts are keyed by the `X-Session-Id` header:
//! - A valid UUID selects that shopper's session
//! - A missing header starts a new session
//! - Anything else is rejected with 400
//!
//! The session id in effect is echoed back on every response so a client
//! that started without one can keep using it.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, ErrorResponse};
use crate::domain::foundation::SessionId;
use crate::domain::shopper::ShopperSession;

/// Header carrying the shopper session id.
pub const SESSION_HEADER: &str = "x-session-id";

/// Resolves the shopper session and injects it into request extensions.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let session = match request.headers().get(SESSION_HEADER) {
        None => {
            let session = ShopperSession::anonymous();
            tracing::debug!(session_id = %session.session_id(), "Started shopper session");
            session
        }
        Some(value) => {
            let parsed = value
                .to_str()
                .ok()
                .and_then(|raw| raw.trim().parse::<SessionId>().ok());
            match parsed {
                Some(id) => ShopperSession::new(id),
                None => return bad_request("X-Session-Id must be a UUID"),
            }
        }
    };

    let session_id = session.session_id();
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }
    response
}

/// Extractor for the shopper session resolved by `session_middleware`.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub ShopperSession);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ShopperSession>()
            .cloned()
            .map(CurrentSession)
            .ok_or(SessionRejection::Missing)
    }
}

/// Rejection when no session was resolved for the request.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    Missing,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::Missing => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("No shopper session for this request")),
            )
                .into_response(),
        }
    }
}
