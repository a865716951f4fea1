//! Comment service — submission and moderation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ortus_core::error::{ApiError, ErrorDetail};
use ortus_core::response::ApiResponse;
use ortus_core::result::ApiResult;
use ortus_database::repositories::BlogRepository;
use ortus_entity::blog::{BlogComment, CreateComment, PostStatus};

use crate::viewer::Viewer;

/// Handles comment submission and moderation.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Blog repository (comments live with their posts).
    posts: Arc<BlogRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(posts: Arc<BlogRepository>) -> Self {
        Self { posts }
    }

    /// Lists approved comments on a post.
    pub async fn list_comments(&self, slug: &str) -> ApiResult<Vec<BlogComment>> {
        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .require_data("blog post lookup")?;

        self.posts.list_approved_comments(post.id).await
    }

    /// Submits a comment on a published post. Comments are held for
    /// moderation.
    pub async fn submit_comment(
        &self,
        slug: &str,
        content: String,
        parent_id: Option<Uuid>,
        viewer: &Viewer,
    ) -> ApiResult<BlogComment> {
        let Some(user_id) = viewer.user_id.clone() else {
            return Err(ApiError::authorisation("Commenting requires sign-in"));
        };

        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .require_data("blog post lookup")?;

        if post.status != PostStatus::Published {
            return Err(ApiError::activity_mismatch(
                "The target post is not open for comments",
            ));
        }

        let created = self
            .posts
            .create_comment(&CreateComment {
                post_id: post.id,
                user_id,
                content,
                parent_id,
            })
            .await?;

        Ok(match created {
            ApiResponse::Success { data, .. } => {
                ApiResponse::success_with(data, "Comment held for moderation")
            }
            other => other,
        })
    }

    /// Approves a held comment. Approving twice changes nothing.
    pub async fn approve_comment(&self, id: Uuid, viewer: &Viewer) -> ApiResult<BlogComment> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Moderating comments requires admin access",
            ));
        }

        let comment = match self.posts.find_comment(id).await? {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        if comment.approved {
            return Ok(ApiResponse::inconsequential_with(
                comment,
                "Comment is already approved",
            ));
        }

        let approved = self.posts.approve_comment(id).await?;
        info!(comment_id = %id, "Comment approved");
        Ok(approved)
    }

    /// Deletes a comment. Owners may delete their own; moderators may
    /// delete any. Deleting an absent comment changes nothing.
    pub async fn delete_comment(&self, id: Uuid, viewer: &Viewer) -> ApiResult<BlogComment> {
        let comment = match self.posts.find_comment(id).await {
            Ok(response) => match response {
                ApiResponse::Success { data, .. } => data,
                other => return Ok(other),
            },
            Err(err) if err.detail == ErrorDetail::NotFound => {
                return Ok(ApiResponse::inconsequential("Comment was already removed"));
            }
            Err(err) => return Err(err),
        };

        if !viewer.owns(&comment.user_id) && !viewer.can_moderate() {
            return Err(ApiError::invalid_ownership(
                "Only the comment author or a moderator may delete it",
            ));
        }

        self.posts.delete_comment(id).await?;
        info!(comment_id = %id, "Comment deleted");
        Ok(ApiResponse::no_data_with("Comment deleted"))
    }
}
