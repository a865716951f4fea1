//! Project service — listing, visibility, and overview assembly.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use ortus_core::error::{ApiError, ErrorDetail};
use ortus_core::response::{ApiResponse, FailForwardDirective, PartialReason};
use ortus_core::result::ApiResult;
use ortus_database::repositories::{BlogRepository, ProjectRepository};
use ortus_entity::blog::BlogPost;
use ortus_entity::project::{CreateProject, Project, UpdateProject};

use crate::viewer::Viewer;

/// A project together with its recent posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectOverview {
    /// The project itself.
    pub project: Project,
    /// Published posts on the project blog, newest first.
    pub posts: Vec<BlogPost>,
}

/// Handles project reads and administration.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Project repository.
    projects: Arc<ProjectRepository>,
    /// Blog repository, for project blogs.
    posts: Arc<BlogRepository>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(projects: Arc<ProjectRepository>, posts: Arc<BlogRepository>) -> Self {
        Self { projects, posts }
    }

    /// Lists projects, hiding private ones from the public.
    pub async fn list_projects(&self, viewer: &Viewer) -> ApiResult<Vec<Project>> {
        let all = self.projects.list_all().await?;
        if viewer.can_moderate() {
            return Ok(all);
        }
        Ok(all.map(|projects| projects.into_iter().filter(|p| !p.private).collect()))
    }

    /// Gets a project by shortname, withholding detail for private ones.
    pub async fn get_project(&self, shortname: &str, viewer: &Viewer) -> ApiResult<Project> {
        let project = match self.projects.find_by_shortname(shortname).await? {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        if project.private && !viewer.can_moderate() {
            return Ok(ApiResponse::partial(
                project.redacted(),
                PartialReason::Private,
                "Details withheld for a private project",
            ));
        }

        Ok(ApiResponse::success(project))
    }

    /// Gets a project with its recent posts.
    ///
    /// When the post lookup degrades, the bare project is still returned
    /// as a fail-forward rather than failing the whole call.
    pub async fn get_overview(&self, shortname: &str, viewer: &Viewer) -> ApiResult<ProjectOverview> {
        let base = self.get_project(shortname, viewer).await?.map(|project| {
            ProjectOverview {
                project,
                posts: Vec::new(),
            }
        });

        let mut overview = match base {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        match self.posts.list_by_project(overview.project.id).await {
            Ok(response) => {
                overview.posts = response.into_data().unwrap_or_default();
                Ok(ApiResponse::success(overview))
            }
            Err(err) => {
                warn!(shortname, error = %err, "Project post lookup degraded");
                Ok(ApiResponse::fail_forward(
                    overview,
                    FailForwardDirective::AppendMessage,
                    "Project posts are currently unavailable",
                ))
            }
        }
    }

    /// Updates a project's editable fields.
    pub async fn update_project(
        &self,
        input: UpdateProject,
        viewer: &Viewer,
    ) -> ApiResult<Project> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Editing projects requires admin access",
            ));
        }
        self.projects.update(&input).await
    }

    /// Creates a new project.
    pub async fn create_project(
        &self,
        input: CreateProject,
        viewer: &Viewer,
    ) -> ApiResult<Project> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Creating projects requires admin access",
            ));
        }

        match self.projects.find_by_shortname(&input.shortname).await {
            Ok(_) => {
                return Err(ApiError::duplicate(format!(
                    "Shortname '{}' is already in use",
                    input.shortname
                )));
            }
            Err(err) if err.detail == ErrorDetail::NotFound => {}
            Err(err) => return Err(err),
        }

        let created = self.projects.create(&input).await?;
        info!(shortname = %input.shortname, "Project created");
        Ok(created)
    }
}
