//! Project models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::stage::ProjectStage;

/// A foundation project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Short handle used in URLs.
    pub shortname: String,
    /// Maturity stage.
    pub stage: ProjectStage,
    /// Project title.
    pub title: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Whether the project is open source.
    pub oss: bool,
    /// Whether the project is hidden from the public listing.
    pub private: bool,
    /// Cover image file.
    pub cover_image_id: Option<Uuid>,
    /// Logo image file.
    pub logo_image_id: Option<Uuid>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Return a copy with non-public detail withheld.
    pub fn redacted(mut self) -> Self {
        self.description = None;
        self.cover_image_id = None;
        self
    }
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Short handle used in URLs.
    pub shortname: String,
    /// Maturity stage.
    pub stage: ProjectStage,
    /// Project title.
    pub title: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Whether the project is open source.
    pub oss: bool,
    /// Whether the project is hidden from the public listing.
    pub private: bool,
}

/// Data for updating an existing project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProject {
    /// The project to update.
    pub id: Uuid,
    /// New stage.
    pub stage: Option<ProjectStage>,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New privacy flag.
    pub private: Option<bool>,
}
