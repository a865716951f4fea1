//! Request DTOs with schema validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ortus_entity::file::{FileKind, StorageProvider};
use ortus_entity::project::ProjectStage;
use ortus_entity::team::MemberRole;

/// Payload for creating a blog post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// URL slug.
    #[validate(length(min = 3, max = 128))]
    pub slug: String,
    /// Post title.
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    /// Optional subtitle.
    #[validate(length(max = 512))]
    pub subtitle: Option<String>,
    /// Post body.
    #[validate(length(min = 1))]
    pub content: String,
    /// Whether the post is featured.
    #[serde(default)]
    pub featured: bool,
    /// Owning project, if any.
    pub project_id: Option<Uuid>,
    /// Authoring team member.
    pub author_id: Uuid,
    /// Cover image file, if any.
    pub cover_image_id: Option<Uuid>,
}

/// Payload for editing a blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    /// New title.
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    /// New subtitle.
    #[validate(length(max = 512))]
    pub subtitle: Option<String>,
    /// New body.
    #[validate(length(min = 1))]
    pub content: Option<String>,
    /// New featured flag.
    pub featured: Option<bool>,
}

/// Payload for publishing a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishPostRequest {
    /// Publication start, for posts that never carried one.
    pub start: Option<DateTime<Utc>>,
}

/// Payload for submitting a comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment body.
    #[validate(length(min = 1, max = 4000))]
    pub content: String,
    /// Parent comment for threaded replies.
    pub parent_id: Option<Uuid>,
}

/// Payload for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Short handle used in URLs.
    #[validate(length(min = 2, max = 24))]
    pub shortname: String,
    /// Maturity stage.
    pub stage: ProjectStage,
    /// Project title.
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Whether the project is open source.
    #[serde(default = "default_true")]
    pub oss: bool,
    /// Whether the project is hidden from the public listing.
    #[serde(default)]
    pub private: bool,
}

/// Payload for editing a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    /// New stage.
    pub stage: Option<ProjectStage>,
    /// New title.
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New privacy flag.
    pub private: Option<bool>,
}

/// Payload for adding a team member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMemberRequest {
    /// External auth subject.
    #[validate(length(min = 1, max = 32))]
    pub user_id: String,
    /// Role within the team.
    pub role: MemberRole,
    /// Public title.
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    /// Public bio.
    pub description: Option<String>,
    /// When the member joined.
    pub join_date: Option<DateTime<Utc>>,
}

/// Payload for queuing a file transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Provider the bytes should move to.
    pub target: StorageProvider,
}

/// Payload for registering a file held by an external provider.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterFileRequest {
    /// Original file name.
    #[validate(length(min = 1))]
    pub name: String,
    /// What the file is used for.
    pub kind: FileKind,
    /// MIME content type.
    #[validate(length(min = 1))]
    pub content_type: String,
    /// Size in bytes.
    #[validate(range(min = 1))]
    pub size: i32,
    /// Provider key when stored in UploadThing.
    #[validate(length(max = 48))]
    pub ufs_key: Option<String>,
    /// Provider path when stored in blob storage.
    pub blob_path: Option<String>,
    /// Public URL.
    #[validate(length(min = 1))]
    pub url: String,
    /// Provider currently holding the bytes.
    pub stored_in: StorageProvider,
    /// Provider the bytes should end up in.
    pub target_storage: StorageProvider,
    /// External auth subject of the uploader.
    #[validate(length(min = 1, max = 32))]
    pub owner: String,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_slug_is_rejected() {
        let request = CreatePostRequest {
            slug: "ab".to_string(),
            title: "Title".to_string(),
            subtitle: None,
            content: "Body".to_string(),
            featured: false,
            project_id: None,
            author_id: Uuid::new_v4(),
            cover_image_id: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_valid_post_passes() {
        let request = CreatePostRequest {
            slug: "hello-world".to_string(),
            title: "Hello".to_string(),
            subtitle: None,
            content: "Body".to_string(),
            featured: false,
            project_id: None,
            author_id: Uuid::new_v4(),
            cover_image_id: None,
        };
        assert!(request.validate().is_ok());
    }
}
