//! Stored file handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use validator::Validate;

use ortus_core::ApiError;
use ortus_entity::file::{CreateFile, StoredFile};

use crate::dto::request::{RegisterFileRequest, TransferRequest};
use crate::dto::response::{Envelope, respond};
use crate::error::ApiFailure;
use crate::extractors::{AdminGate, MaybeViewer};
use crate::state::AppState;

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<Envelope<StoredFile>>), ApiFailure> {
    let response = state.file_service.get_file(id).await?;
    Ok(respond(response))
}

/// GET /api/admin/files/transcending
pub async fn list_transcending(
    State(state): State<AppState>,
    AdminGate(viewer): AdminGate,
) -> Result<(StatusCode, Json<Envelope<Vec<StoredFile>>>), ApiFailure> {
    let response = state.file_service.list_transcending(&viewer).await?;
    Ok(respond(response))
}

/// POST /api/admin/files
pub async fn register_file(
    State(state): State<AppState>,
    AdminGate(viewer): AdminGate,
    Json(req): Json<RegisterFileRequest>,
) -> Result<(StatusCode, Json<Envelope<StoredFile>>), ApiFailure> {
    req.validate().map_err(ApiError::from)?;

    let response = state
        .file_service
        .register_file(
            CreateFile {
                name: req.name,
                kind: req.kind,
                content_type: req.content_type,
                size: req.size,
                ufs_key: req.ufs_key,
                blob_path: req.blob_path,
                url: req.url,
                stored_in: req.stored_in,
                target_storage: req.target_storage,
                owner: req.owner,
            },
            &viewer,
        )
        .await?;
    Ok(respond(response))
}

/// POST /api/admin/files/{id}/transfer
pub async fn begin_transfer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    MaybeViewer(viewer): MaybeViewer,
    Json(req): Json<TransferRequest>,
) -> Result<(StatusCode, Json<Envelope<StoredFile>>), ApiFailure> {
    let response = state
        .file_service
        .begin_transfer(id, req.target, &viewer)
        .await?;
    Ok(respond(response))
}

/// POST /api/admin/files/{id}/transfer/complete
pub async fn complete_transfer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminGate(viewer): AdminGate,
) -> Result<(StatusCode, Json<Envelope<StoredFile>>), ApiFailure> {
    let response = state.file_service.complete_transfer(id, &viewer).await?;
    Ok(respond(response))
}
