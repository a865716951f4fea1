//! Application builder — wires repositories, services, and state into an
//! Axum app and runs it.

use std::sync::Arc;

use axum::Router;

use ortus_core::ApiError;
use ortus_core::config::AppConfig;
use ortus_core::config::app::CorsConfig;
use ortus_core::flags::FeatureFlags;
use ortus_database::DatabasePool;
use ortus_database::repositories::{
    BlogRepository, FileRepository, MemberRepository, ProjectRepository,
};
use ortus_service::blog::{BlogService, CommentService};
use ortus_service::file::FileService;
use ortus_service::project::ProjectService;
use ortus_service::team::TeamService;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state).layer(build_cors_layer(cors_config))
}

/// Builds the shared application state from configuration and a pool set.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let flags = FeatureFlags::evaluate(&config.flags);

    let blog_repo = Arc::new(BlogRepository::new(db.clone()));
    let project_repo = Arc::new(ProjectRepository::new(db.clone()));
    let member_repo = Arc::new(MemberRepository::new(db.clone()));
    let file_repo = Arc::new(FileRepository::new(db.clone()));

    let blog_service = Arc::new(BlogService::new(Arc::clone(&blog_repo), flags));
    let comment_service = Arc::new(CommentService::new(Arc::clone(&blog_repo)));
    let project_service = Arc::new(ProjectService::new(
        Arc::clone(&project_repo),
        Arc::clone(&blog_repo),
    ));
    let team_service = Arc::new(TeamService::new(Arc::clone(&member_repo)));
    let file_service = Arc::new(FileService::new(Arc::clone(&file_repo)));

    AppState {
        config: Arc::new(config),
        flags,
        db,
        blog_service,
        comment_service,
        project_service,
        team_service,
        file_service,
    }
}

/// Runs the Ortus server with the given configuration and pool set.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), ApiError> {
    let cors_config = config.server.cors.clone();
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db);
    let app = build_app(state, &cors_config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ApiError::failed(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Ortus server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::failed(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
