//! Project repository.

use sqlx::query_as;
use uuid::Uuid;

use ortus_core::interaction::{InteractionKind, fetch_all, fetch_first};
use ortus_core::result::ApiResult;
use ortus_entity::project::{CreateProject, Project, UpdateProject};

use crate::connection::DatabasePool;

/// Repository for project persistence.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: DatabasePool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Find a project by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<Project> {
        fetch_first(
            query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
                .bind(id)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// Find a project by its shortname.
    pub async fn find_by_shortname(&self, shortname: &str) -> ApiResult<Project> {
        fetch_first(
            query_as::<_, Project>("SELECT * FROM projects WHERE shortname = $1")
                .bind(shortname)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// List all projects, most recently updated first.
    pub async fn list_all(&self) -> ApiResult<Vec<Project>> {
        fetch_all(
            query_as::<_, Project>("SELECT * FROM projects ORDER BY updated_at DESC")
                .fetch_all(self.db.read()),
        )
        .await
    }

    /// Insert a new project.
    pub async fn create(&self, data: &CreateProject) -> ApiResult<Project> {
        fetch_first(
            query_as::<_, Project>(
                "INSERT INTO projects (shortname, stage, title, description, oss, private) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING *",
            )
            .bind(&data.shortname)
            .bind(data.stage)
            .bind(&data.title)
            .bind(&data.description)
            .bind(data.oss)
            .bind(data.private)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }

    /// Update a project's editable fields.
    pub async fn update(&self, data: &UpdateProject) -> ApiResult<Project> {
        fetch_first(
            query_as::<_, Project>(
                "UPDATE projects SET stage = COALESCE($2, stage), \
                                     title = COALESCE($3, title), \
                                     description = COALESCE($4, description), \
                                     private = COALESCE($5, private), \
                                     updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(data.id)
            .bind(data.stage)
            .bind(&data.title)
            .bind(&data.description)
            .bind(data.private)
            .fetch_all(self.db.write()),
            InteractionKind::Default,
        )
        .await
    }
}
