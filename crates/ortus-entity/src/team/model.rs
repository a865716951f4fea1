//! Team member models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::MemberRole;

/// A foundation team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique member identifier.
    pub id: Uuid,
    /// External auth subject.
    pub user_id: String,
    /// Role within the team.
    pub role: MemberRole,
    /// Public title.
    pub title: String,
    /// Public bio.
    pub description: Option<String>,
    /// Profile image file.
    pub profile_image_id: Option<Uuid>,
    /// When the member joined.
    pub join_date: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    /// External auth subject.
    pub user_id: String,
    /// Role within the team.
    pub role: MemberRole,
    /// Public title.
    pub title: String,
    /// Public bio.
    pub description: Option<String>,
    /// When the member joined.
    pub join_date: Option<DateTime<Utc>>,
}
