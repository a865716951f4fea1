//! Route definitions for the Ortus HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! Administrative routes live under `/api/admin` behind the admin gate.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(blog_routes())
        .merge(project_routes())
        .merge(team_routes())
        .merge(file_routes())
        .merge(admin_routes())
        .merge(flag_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Public blog endpoints.
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blog/posts", get(handlers::blog::list_posts))
        .route("/blog/posts/featured", get(handlers::blog::list_featured))
        .route("/blog/posts/{slug}", get(handlers::blog::get_post))
        .route(
            "/blog/posts/{slug}/comments",
            get(handlers::blog::list_comments).post(handlers::blog::submit_comment),
        )
        .route(
            "/blog/comments/{id}",
            delete(handlers::blog::delete_comment),
        )
}

/// Public project endpoints.
fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::project::list_projects))
        .route("/projects/{shortname}", get(handlers::project::get_project))
        .route(
            "/projects/{shortname}/overview",
            get(handlers::project::get_overview),
        )
}

/// Public team endpoints.
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/team", get(handlers::team::roster))
        .route("/team/{id}", get(handlers::team::get_member))
}

/// Public file metadata endpoints.
fn file_routes() -> Router<AppState> {
    Router::new().route("/files/{id}", get(handlers::file::get_file))
}

/// Administrative endpoints (gated by the admin token).
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/posts", post(handlers::blog::create_post))
        .route("/admin/posts/{id}", put(handlers::blog::update_post))
        .route(
            "/admin/posts/{id}/publish",
            post(handlers::blog::publish_post),
        )
        .route(
            "/admin/posts/{id}/archive",
            post(handlers::blog::archive_post),
        )
        .route(
            "/admin/comments/{id}/approve",
            post(handlers::blog::approve_comment),
        )
        .route("/admin/projects", post(handlers::project::create_project))
        .route(
            "/admin/projects/{id}",
            put(handlers::project::update_project),
        )
        .route("/admin/team", post(handlers::team::add_member))
        .route("/admin/files", post(handlers::file::register_file))
        .route(
            "/admin/files/transcending",
            get(handlers::file::list_transcending),
        )
        .route(
            "/admin/files/{id}/transfer",
            post(handlers::file::begin_transfer),
        )
        .route(
            "/admin/files/{id}/transfer/complete",
            post(handlers::file::complete_transfer),
        )
}

/// Feature flag endpoint.
fn flag_routes() -> Router<AppState> {
    Router::new().route("/flags", get(handlers::flags::get_flags))
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::liveness))
        .route("/health/db", get(handlers::health::database))
}
