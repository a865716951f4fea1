//! Blog post and comment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use ortus_core::ApiError;
use ortus_core::types::pagination::PageResponse;
use ortus_entity::blog::{BlogComment, BlogPost, CreateBlogPost, UpdateBlogPost};

use crate::dto::request::{
    CreateCommentRequest, CreatePostRequest, PublishPostRequest, UpdatePostRequest,
};
use crate::dto::response::{Envelope, respond};
use crate::error::ApiFailure;
use crate::extractors::{AdminGate, MaybeViewer, PaginationParams};
use crate::state::AppState;

/// GET /api/blog/posts
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<(StatusCode, Json<Envelope<PageResponse<BlogPost>>>), ApiFailure> {
    let page = params.into_page_request();
    let response = state.blog_service.list_root(&page).await?;
    Ok(respond(response))
}

/// GET /api/blog/posts/featured
pub async fn list_featured(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<Vec<BlogPost>>>), ApiFailure> {
    let response = state.blog_service.list_featured().await?;
    Ok(respond(response))
}

/// GET /api/blog/posts/{slug}
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    MaybeViewer(viewer): MaybeViewer,
) -> Result<(StatusCode, Json<Envelope<BlogPost>>), ApiFailure> {
    let response = state.blog_service.get_post(&slug, &viewer).await?;
    Ok(respond(response))
}

/// POST /api/admin/posts
pub async fn create_post(
    State(state): State<AppState>,
    AdminGate(viewer): AdminGate,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Envelope<BlogPost>>), ApiFailure> {
    req.validate().map_err(ApiError::from)?;

    let response = state
        .blog_service
        .create_post(
            CreateBlogPost {
                slug: req.slug,
                title: req.title,
                subtitle: req.subtitle,
                content: req.content,
                featured: req.featured,
                project_id: req.project_id,
                author_id: req.author_id,
                cover_image_id: req.cover_image_id,
            },
            &viewer,
        )
        .await?;
    Ok(respond(response))
}

/// PUT /api/admin/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminGate(viewer): AdminGate,
    Json(req): Json<UpdatePostRequest>,
) -> Result<(StatusCode, Json<Envelope<BlogPost>>), ApiFailure> {
    req.validate().map_err(ApiError::from)?;

    let response = state
        .blog_service
        .update_post(
            UpdateBlogPost {
                id,
                title: req.title,
                subtitle: req.subtitle,
                content: req.content,
                featured: req.featured,
            },
            &viewer,
        )
        .await?;
    Ok(respond(response))
}

/// POST /api/admin/posts/{id}/publish
pub async fn publish_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminGate(viewer): AdminGate,
    Json(req): Json<PublishPostRequest>,
) -> Result<(StatusCode, Json<Envelope<BlogPost>>), ApiFailure> {
    let response = state
        .blog_service
        .publish_post(id, req.start, &viewer)
        .await?;
    Ok(respond(response))
}

/// POST /api/admin/posts/{id}/archive
pub async fn archive_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminGate(viewer): AdminGate,
) -> Result<(StatusCode, Json<Envelope<BlogPost>>), ApiFailure> {
    let response = state.blog_service.archive_post(id, &viewer).await?;
    Ok(respond(response))
}

/// GET /api/blog/posts/{slug}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<(StatusCode, Json<Envelope<Vec<BlogComment>>>), ApiFailure> {
    let response = state.comment_service.list_comments(&slug).await?;
    Ok(respond(response))
}

/// POST /api/blog/posts/{slug}/comments
pub async fn submit_comment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    MaybeViewer(viewer): MaybeViewer,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Envelope<BlogComment>>), ApiFailure> {
    req.validate().map_err(ApiError::from)?;

    let response = state
        .comment_service
        .submit_comment(&slug, req.content, req.parent_id, &viewer)
        .await?;
    Ok(respond(response))
}

/// POST /api/admin/comments/{id}/approve
pub async fn approve_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminGate(viewer): AdminGate,
) -> Result<(StatusCode, Json<Envelope<BlogComment>>), ApiFailure> {
    let response = state.comment_service.approve_comment(id, &viewer).await?;
    Ok(respond(response))
}

/// DELETE /api/blog/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    MaybeViewer(viewer): MaybeViewer,
) -> Result<(StatusCode, Json<Envelope<BlogComment>>), ApiFailure> {
    let response = state.comment_service.delete_comment(id, &viewer).await?;
    Ok(respond(response))
}
