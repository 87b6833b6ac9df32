//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `session` - Shopper session resolution and extractor

pub mod session;

pub use session::{session_middleware, CurrentSession, SessionRejection, SESSION_HEADER};
