//! Feature flag handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use ortus_core::flags::FeatureFlags;
use ortus_core::response::ApiResponse;

use crate::dto::response::{Envelope, respond};
use crate::state::AppState;

/// GET /api/flags
pub async fn get_flags(State(state): State<AppState>) -> (StatusCode, Json<Envelope<FeatureFlags>>) {
    respond(ApiResponse::success(state.flags))
}
