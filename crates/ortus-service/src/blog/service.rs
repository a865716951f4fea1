//! Blog post service — listing, visibility, and the publication lifecycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use ortus_core::error::{ApiError, ErrorDetail};
use ortus_core::flags::FeatureFlags;
use ortus_core::response::{ApiResponse, PartialReason};
use ortus_core::result::ApiResult;
use ortus_core::types::pagination::{PageRequest, PageResponse};
use ortus_database::repositories::BlogRepository;
use ortus_entity::blog::{BlogPost, CreateBlogPost, PostStatus, UpdateBlogPost};

use crate::viewer::Viewer;

/// Handles blog post reads and the publication lifecycle.
#[derive(Debug, Clone)]
pub struct BlogService {
    /// Blog repository.
    posts: Arc<BlogRepository>,
    /// Evaluated feature flags.
    flags: FeatureFlags,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(posts: Arc<BlogRepository>, flags: FeatureFlags) -> Self {
        Self { posts, flags }
    }

    /// Lists published root posts, newest first.
    pub async fn list_root(&self, page: &PageRequest) -> ApiResult<PageResponse<BlogPost>> {
        self.posts.list_root(page).await
    }

    /// Lists featured published posts.
    pub async fn list_featured(&self) -> ApiResult<Vec<BlogPost>> {
        self.posts.list_featured().await
    }

    /// Gets a post by slug, applying visibility rules.
    ///
    /// Drafts are withheld from the public; dev mode and moderators see
    /// them in full. Archived posts come back whole but flagged.
    pub async fn get_post(&self, slug: &str, viewer: &Viewer) -> ApiResult<BlogPost> {
        let post = match self.posts.find_by_slug(slug).await? {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        match post.status {
            PostStatus::Published => Ok(ApiResponse::success(post)),
            PostStatus::Draft => {
                if viewer.can_moderate() || self.flags.dev_mode {
                    Ok(ApiResponse::success(post))
                } else {
                    Ok(ApiResponse::partial(
                        post.redacted(),
                        PartialReason::Private,
                        "Content withheld until publication",
                    ))
                }
            }
            PostStatus::Archived => Ok(ApiResponse::partial(
                post,
                PartialReason::Archived,
                "This post has been archived",
            )),
        }
    }

    /// Creates a new draft post.
    pub async fn create_post(&self, input: CreateBlogPost, viewer: &Viewer) -> ApiResult<BlogPost> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation("Creating posts requires admin access"));
        }

        match self.posts.find_by_slug(&input.slug).await {
            Ok(_) => {
                return Err(ApiError::duplicate(format!(
                    "Slug '{}' is already in use",
                    input.slug
                )));
            }
            Err(err) if err.detail == ErrorDetail::NotFound => {}
            Err(err) => return Err(err),
        }

        let created = self.posts.create(&input).await?;
        info!(slug = %input.slug, "Blog post created");
        Ok(created)
    }

    /// Updates a post's editable fields.
    pub async fn update_post(&self, input: UpdateBlogPost, viewer: &Viewer) -> ApiResult<BlogPost> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation("Editing posts requires admin access"));
        }
        self.posts.update(&input).await
    }

    /// Publishes a draft post.
    ///
    /// A post that never carried a publication instant needs an explicit
    /// start; publishing an already-published post changes nothing.
    pub async fn publish_post(
        &self,
        id: Uuid,
        start: Option<DateTime<Utc>>,
        viewer: &Viewer,
    ) -> ApiResult<BlogPost> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Publishing posts requires admin access",
            ));
        }

        let post = match self.posts.find_by_id(id).await? {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        match post.status {
            PostStatus::Published => Ok(ApiResponse::inconsequential_with(
                post,
                "Post is already published",
            )),
            PostStatus::Archived => Err(ApiError::invalid_state(
                "Archived posts cannot be re-published",
            )),
            PostStatus::Draft => {
                let at = post.published_at.or(start).ok_or_else(|| {
                    ApiError::missing_start_date("Publishing requires a start date")
                })?;

                let published = self
                    .posts
                    .set_status(id, PostStatus::Published, Some(at))
                    .await?;
                info!(post_id = %id, "Blog post published");
                Ok(published)
            }
        }
    }

    /// Archives a post.
    pub async fn archive_post(&self, id: Uuid, viewer: &Viewer) -> ApiResult<BlogPost> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Archiving posts requires admin access",
            ));
        }

        let post = match self.posts.find_by_id(id).await? {
            ApiResponse::Success { data, .. } => data,
            other => return Ok(other),
        };

        if post.status == PostStatus::Archived {
            return Ok(ApiResponse::inconsequential_with(
                post,
                "Post is already archived",
            ));
        }

        let archived = self.posts.set_status(id, PostStatus::Archived, None).await?;
        info!(post_id = %id, "Blog post archived");
        Ok(archived)
    }
}
