//! Project handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use ortus_core::ApiError;
use ortus_entity::project::{CreateProject, Project, UpdateProject};
use ortus_service::project::ProjectOverview;

use crate::dto::request::{CreateProjectRequest, UpdateProjectRequest};
use crate::dto::response::{Envelope, respond};
use crate::error::ApiFailure;
use crate::extractors::{AdminGate, MaybeViewer};
use crate::state::AppState;

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    MaybeViewer(viewer): MaybeViewer,
) -> Result<(StatusCode, Json<Envelope<Vec<Project>>>), ApiFailure> {
    let response = state.project_service.list_projects(&viewer).await?;
    Ok(respond(response))
}

/// GET /api/projects/{shortname}
pub async fn get_project(
    State(state): State<AppState>,
    Path(shortname): Path<String>,
    MaybeViewer(viewer): MaybeViewer,
) -> Result<(StatusCode, Json<Envelope<Project>>), ApiFailure> {
    let response = state.project_service.get_project(&shortname, &viewer).await?;
    Ok(respond(response))
}

/// GET /api/projects/{shortname}/overview
pub async fn get_overview(
    State(state): State<AppState>,
    Path(shortname): Path<String>,
    MaybeViewer(viewer): MaybeViewer,
) -> Result<(StatusCode, Json<Envelope<ProjectOverview>>), ApiFailure> {
    let response = state.project_service.get_overview(&shortname, &viewer).await?;
    Ok(respond(response))
}

/// PUT /api/admin/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    AdminGate(viewer): AdminGate,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<(StatusCode, Json<Envelope<Project>>), ApiFailure> {
    req.validate().map_err(ApiError::from)?;

    let response = state
        .project_service
        .update_project(
            UpdateProject {
                id,
                stage: req.stage,
                title: req.title,
                description: req.description,
                private: req.private,
            },
            &viewer,
        )
        .await?;
    Ok(respond(response))
}

/// POST /api/admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    AdminGate(viewer): AdminGate,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Envelope<Project>>), ApiFailure> {
    req.validate().map_err(ApiError::from)?;

    let response = state
        .project_service
        .create_project(
            CreateProject {
                shortname: req.shortname,
                stage: req.stage,
                title: req.title,
                description: req.description,
                oss: req.oss,
                private: req.private,
            },
            &viewer,
        )
        .await?;
    Ok(respond(response))
}
