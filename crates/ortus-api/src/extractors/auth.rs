//! Viewer extractors — the admin gate and best-effort viewer context.
//!
//! Identity verification itself lives with the external auth provider; the
//! gateway forwards the verified subject in `x-user-id`. Administrative
//! routes additionally require the configured bearer token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use ortus_core::ApiError;
use ortus_service::Viewer;

use crate::error::ApiFailure;
use crate::state::AppState;

/// Extractor that rejects callers without the configured admin token.
#[derive(Debug, Clone)]
pub struct AdminGate(pub Viewer);

impl FromRequestParts<AppState> for AdminGate {
    type Rejection = ApiFailure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::authorisation("Missing Authorization header"))?;

        let expected = &state.config.auth.admin_token;
        if expected.is_empty() || token != expected.as_str() {
            return Err(ApiError::authorisation("Invalid admin token").into());
        }

        Ok(Self(Viewer::admin(forwarded_subject(parts))))
    }
}

/// Extractor that never rejects: admin when the gate token matches,
/// signed-in when a subject was forwarded, anonymous otherwise.
#[derive(Debug, Clone)]
pub struct MaybeViewer(pub Viewer);

impl FromRequestParts<AppState> for MaybeViewer {
    type Rejection = ApiFailure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = &state.config.auth.admin_token;
        if let Some(token) = bearer_token(parts) {
            if !expected.is_empty() && token == expected.as_str() {
                return Ok(Self(Viewer::admin(forwarded_subject(parts))));
            }
        }

        let viewer = match forwarded_subject(parts) {
            Some(user_id) => Viewer::user(user_id),
            None => Viewer::anonymous(),
        };
        Ok(Self(viewer))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn forwarded_subject(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
}
