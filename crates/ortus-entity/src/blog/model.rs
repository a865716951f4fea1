//! Blog post and comment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PostStatus;

/// A blog post. Posts without a `project_id` belong to the root blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    /// Unique post identifier.
    pub id: Uuid,
    /// URL slug, unique across all posts.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Post body.
    pub content: String,
    /// Lifecycle status.
    pub status: PostStatus,
    /// Whether the post is featured on the landing page.
    pub featured: bool,
    /// Owning project, when the post belongs to a project blog.
    pub project_id: Option<Uuid>,
    /// Authoring team member.
    pub author_id: Uuid,
    /// Cover image file.
    pub cover_image_id: Option<Uuid>,
    /// Publication instant, set when the post went live.
    pub published_at: Option<DateTime<Utc>>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Check whether the post is publicly visible.
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Return a copy with the body withheld, keeping only the metadata a
    /// teaser needs.
    pub fn redacted(mut self) -> Self {
        self.content = String::new();
        self.subtitle = None;
        self.cover_image_id = None;
        self
    }
}

/// Data required to create a new blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPost {
    /// URL slug.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Post body.
    pub content: String,
    /// Whether the post is featured.
    pub featured: bool,
    /// Owning project, if any.
    pub project_id: Option<Uuid>,
    /// Authoring team member.
    pub author_id: Uuid,
    /// Cover image file, if any.
    pub cover_image_id: Option<Uuid>,
}

/// Data for updating an existing blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBlogPost {
    /// The post to update.
    pub id: Uuid,
    /// New title.
    pub title: Option<String>,
    /// New subtitle.
    pub subtitle: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New featured flag.
    pub featured: Option<bool>,
}

/// A comment on a blog post. Comments are held until approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BlogComment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The commented post.
    pub post_id: Uuid,
    /// External auth subject of the commenter.
    pub user_id: String,
    /// Comment body.
    pub content: String,
    /// Parent comment for threaded replies.
    pub parent_id: Option<Uuid>,
    /// Whether a moderator has approved the comment.
    pub approved: bool,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The commented post.
    pub post_id: Uuid,
    /// External auth subject of the commenter.
    pub user_id: String,
    /// Comment body.
    pub content: String,
    /// Parent comment for threaded replies.
    pub parent_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(status: PostStatus) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            slug: "hello-world".to_string(),
            title: "Hello World".to_string(),
            subtitle: Some("A first post".to_string()),
            content: "Body".to_string(),
            status,
            featured: false,
            project_id: None,
            author_id: Uuid::new_v4(),
            cover_image_id: None,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_redacted_withholds_body_but_keeps_identity() {
        let original = post(PostStatus::Draft);
        let slug = original.slug.clone();
        let redacted = original.redacted();
        assert_eq!(redacted.slug, slug);
        assert!(redacted.content.is_empty());
        assert!(redacted.subtitle.is_none());
    }

    #[test]
    fn test_is_published() {
        assert!(post(PostStatus::Published).is_published());
        assert!(!post(PostStatus::Draft).is_published());
        assert!(!post(PostStatus::Archived).is_published());
    }
}
