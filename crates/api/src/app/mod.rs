//! HTTP application wiring (axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: the user service over the backing store
//! - `routes/`: HTTP routes + handlers
//! - `validation.rs`: request binding and validation
//! - `envelope.rs`: the uniform `{status, message, result}` response body
//! - `errors.rs`: error kinds and their HTTP mapping

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod envelope;
pub mod errors;
pub mod routes;
pub mod services;
pub mod validation;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app() -> Router {
    let service = Arc::new(services::UserService::new());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::unknown_route)
        .layer(Extension(service))
}
