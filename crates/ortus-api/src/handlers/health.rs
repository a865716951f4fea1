//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use ortus_core::response::ApiResponse;

use crate::dto::response::{Envelope, respond};
use crate::error::ApiFailure;
use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// GET /api/health
pub async fn liveness() -> (StatusCode, Json<Envelope<HealthResponse>>) {
    respond(ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/db
pub async fn database(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<HealthResponse>>), ApiFailure> {
    state.db.health_check().await?;

    Ok(respond(ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })))
}
