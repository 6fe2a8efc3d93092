//! Health and probe routes

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the health routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/favicon.ico", get(favicon_handler))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Browsers probing the service must get a plain 200, not a gateway error.
async fn favicon_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({})))
}
