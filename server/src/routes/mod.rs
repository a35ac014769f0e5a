//! Folio API Routes
//!
//! - /health - liveness
//! - /api/session - current admin and permissions
//! - /api/portfolio, /api/clients - admin CRUD
//! - /api/order-batches - atomic reorder writes
//! - /api/public/* - visible entities for the site

mod error;
pub mod clients;
pub mod order_batches;
pub mod portfolio;
pub mod public;
pub mod session;

#[cfg(test)]
mod tests;

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use error::ApiError;

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let Some(origin) = allowed_origin else {
        return CorsLayer::permissive();
    };
    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(e) => {
            log::warn!("Invalid allowed origin {:?}: {}, allowing any", origin, e);
            CorsLayer::permissive()
        }
    }
}

/// Full application router with state, CORS and request tracing
pub fn build_router(state: AppState, allowed_origin: Option<&str>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(session::router())
        .merge(portfolio::router())
        .merge(clients::router())
        .merge(order_batches::router())
        .merge(public::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origin))
        .with_state(state)
}
