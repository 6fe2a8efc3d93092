//! Direct query routes
//!
//! `GET /resolve?device=w&code=1001` — the diagnostic query API. Answers
//! with the resolved record plus the candidate set the numeric remap path
//! considered, so support staff can see why a shorthand code matched.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::mapping::candidates;
use crate::resolver::{resolve, ResolveError};

use super::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    /// Device selector; defaults to the configured default device
    pub device: Option<String>,
    /// Raw code input, numeric or alphanumeric
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub device: String,
    pub input: String,
    /// Candidate set considered by the numeric remap path, when it applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<i64>>,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeviceErrorResponse {
    pub error: String,
    pub devices: Vec<String>,
}

/// Create the resolve routes
pub fn resolve_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/resolve", get(resolve_handler))
        .with_state(state)
}

async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveParams>,
) -> impl IntoResponse {
    let catalog = state.catalog.snapshot();
    let device = params
        .device
        .clone()
        .unwrap_or_else(|| state.default_device.clone());

    // Candidate set shown for diagnostics whenever the remap path applies
    let cands = catalog.table(&device).and_then(|table| {
        if !table.remap_enabled() {
            return None;
        }
        let value: i64 = params.code.trim().parse().ok()?;
        Some(candidates(value, table).into_iter().collect::<Vec<_>>())
    });

    match resolve(&catalog, &device, &params.code) {
        Ok(record) => (
            StatusCode::OK,
            Json(ResolveResponse {
                device,
                input: params.code,
                candidates: cands,
                found: true,
                code: Some(record.code),
                err_name: Some(record.err_name),
                desc: Some(record.desc),
                attach: Some(record.attach),
                message: None,
            }),
        )
            .into_response(),
        Err(ResolveError::UnknownDevice { device, .. }) => (
            StatusCode::BAD_REQUEST,
            Json(DeviceErrorResponse {
                error: format!("unknown device '{}'", device),
                devices: catalog.device_ids().map(String::from).collect(),
            }),
        )
            .into_response(),
        Err(err) => (
            StatusCode::OK,
            Json(ResolveResponse {
                device,
                input: params.code,
                candidates: cands,
                found: false,
                code: None,
                err_name: None,
                desc: None,
                attach: None,
                message: Some(format!("No information found for code '{}'", err.input())),
            }),
        )
            .into_response(),
    }
}
