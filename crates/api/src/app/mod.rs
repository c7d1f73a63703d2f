//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring and the register/list/get use cases
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: form parameters, binding, and JSON mapping helpers
//! - `views.rs`: server-rendered HTML pages
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router with a fresh in-memory store (used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::in_memory(config.default_strategy));
    build_app_with_services(services)
}

/// Build the router around existing services (tests inspect the same store).
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
