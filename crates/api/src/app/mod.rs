//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the data source handle shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use dashboard_infra::DashboardDirectory;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(directory: Arc<dyn DashboardDirectory>) -> Router {
    let services = Arc::new(services::AppServices::new(directory));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log_middleware))
                .layer(Extension(services)),
        )
}
