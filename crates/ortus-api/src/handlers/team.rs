//! Team handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use ortus_core::ApiError;
use ortus_entity::team::{CreateMember, Member};

use crate::dto::request::CreateMemberRequest;
use crate::dto::response::{Envelope, respond};
use crate::error::ApiFailure;
use crate::extractors::AdminGate;
use crate::state::AppState;

/// GET /api/team
pub async fn roster(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<Vec<Member>>>), ApiFailure> {
    let response = state.team_service.roster().await?;
    Ok(respond(response))
}

/// GET /api/team/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<Envelope<Member>>), ApiFailure> {
    let response = state.team_service.get_member(id).await?;
    Ok(respond(response))
}

/// POST /api/admin/team
pub async fn add_member(
    State(state): State<AppState>,
    AdminGate(viewer): AdminGate,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Envelope<Member>>), ApiFailure> {
    req.validate().map_err(ApiError::from)?;

    let response = state
        .team_service
        .add_member(
            CreateMember {
                user_id: req.user_id,
                role: req.role,
                title: req.title,
                description: req.description,
                join_date: req.join_date,
            },
            &viewer,
        )
        .await?;
    Ok(respond(response))
}
