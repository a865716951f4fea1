//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use ortus_core::config::AppConfig;
use ortus_core::flags::FeatureFlags;
use ortus_database::DatabasePool;
use ortus_service::blog::{BlogService, CommentService};
use ortus_service::file::FileService;
use ortus_service::project::ProjectService;
use ortus_service::team::TeamService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheaply cloneable.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Evaluated feature flags.
    pub flags: FeatureFlags,
    /// Primary + replica pool set.
    pub db: DatabasePool,
    /// Blog post service.
    pub blog_service: Arc<BlogService>,
    /// Comment service.
    pub comment_service: Arc<CommentService>,
    /// Project service.
    pub project_service: Arc<ProjectService>,
    /// Team service.
    pub team_service: Arc<TeamService>,
    /// File service.
    pub file_service: Arc<FileService>,
}
