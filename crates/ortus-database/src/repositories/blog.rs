//! Blog post and comment repository.

use sqlx::{query_as, query_scalar};
use uuid::Uuid;

use ortus_core::interaction::{InteractionKind, fetch_all, fetch_first};
use ortus_core::response::ApiResponse;
use ortus_core::result::ApiResult;
use ortus_core::types::pagination::{PageRequest, PageResponse};
use ortus_entity::blog::{BlogComment, BlogPost, CreateBlogPost, CreateComment, UpdateBlogPost};
use ortus_entity::blog::status::PostStatus;

use crate::connection::DatabasePool;

/// Repository for blog post and comment persistence.
#[derive(Debug, Clone)]
pub struct BlogRepository {
    db: DatabasePool,
}

impl BlogRepository {
    /// Create a new blog repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<BlogPost> {
        fetch_first(
            query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
                .bind(id)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// Find a post by its slug.
    pub async fn find_by_slug(&self, slug: &str) -> ApiResult<BlogPost> {
        fetch_first(
            query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = $1")
                .bind(slug)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// List published root posts (no project association), newest first.
    pub async fn list_root(&self, page: &PageRequest) -> ApiResult<PageResponse<BlogPost>> {
        let total = self
            .count(
                "SELECT COUNT(*) FROM blog_posts \
                 WHERE status = 'published' AND project_id IS NULL",
            )
            .await?;

        let rows = fetch_all(
            query_as::<_, BlogPost>(
                "SELECT * FROM blog_posts \
                 WHERE status = 'published' AND project_id IS NULL \
                 ORDER BY published_at DESC LIMIT $1 OFFSET $2",
            )
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(self.db.read()),
        )
        .await?
        .into_data()
        .unwrap_or_default();

        Ok(ApiResponse::success(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        )))
    }

    /// List featured published posts, newest first.
    pub async fn list_featured(&self) -> ApiResult<Vec<BlogPost>> {
        fetch_all(
            query_as::<_, BlogPost>(
                "SELECT * FROM blog_posts \
                 WHERE featured = TRUE AND status = 'published' \
                 ORDER BY published_at DESC",
            )
            .fetch_all(self.db.read()),
        )
        .await
    }

    /// List published posts for a project, newest first.
    pub async fn list_by_project(&self, project_id: Uuid) -> ApiResult<Vec<BlogPost>> {
        fetch_all(
            query_as::<_, BlogPost>(
                "SELECT * FROM blog_posts \
                 WHERE status = 'published' AND project_id = $1 \
                 ORDER BY published_at DESC",
            )
            .bind(project_id)
            .fetch_all(self.db.read()),
        )
        .await
    }

    /// Insert a new post.
    pub async fn create(&self, data: &CreateBlogPost) -> ApiResult<BlogPost> {
        fetch_first(
            query_as::<_, BlogPost>(
                "INSERT INTO blog_posts \
                 (slug, title, subtitle, content, featured, project_id, author_id, cover_image_id) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 RETURNING *",
            )
            .bind(&data.slug)
            .bind(&data.title)
            .bind(&data.subtitle)
            .bind(&data.content)
            .bind(data.featured)
            .bind(data.project_id)
            .bind(data.author_id)
            .bind(data.cover_image_id)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }

    /// Update a post's editable fields.
    pub async fn update(&self, data: &UpdateBlogPost) -> ApiResult<BlogPost> {
        fetch_first(
            query_as::<_, BlogPost>(
                "UPDATE blog_posts SET title = COALESCE($2, title), \
                                       subtitle = COALESCE($3, subtitle), \
                                       content = COALESCE($4, content), \
                                       featured = COALESCE($5, featured), \
                                       updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(data.id)
            .bind(&data.title)
            .bind(&data.subtitle)
            .bind(&data.content)
            .bind(data.featured)
            .fetch_all(self.db.write()),
            InteractionKind::Default,
        )
        .await
    }

    /// Move a post to a new status, stamping the publication instant.
    ///
    /// Callers fetch the post first; the row is guaranteed to exist.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: PostStatus,
        published_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> ApiResult<BlogPost> {
        fetch_first(
            query_as::<_, BlogPost>(
                "UPDATE blog_posts SET status = $2, \
                                       published_at = COALESCE($3, published_at), \
                                       updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id)
            .bind(status)
            .bind(published_at)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }

    /// Find a comment by primary key.
    pub async fn find_comment(&self, id: Uuid) -> ApiResult<BlogComment> {
        fetch_first(
            query_as::<_, BlogComment>("SELECT * FROM blog_comments WHERE id = $1")
                .bind(id)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// List approved comments on a post, oldest first.
    pub async fn list_approved_comments(&self, post_id: Uuid) -> ApiResult<Vec<BlogComment>> {
        fetch_all(
            query_as::<_, BlogComment>(
                "SELECT * FROM blog_comments \
                 WHERE post_id = $1 AND approved = TRUE \
                 ORDER BY created_at ASC",
            )
            .bind(post_id)
            .fetch_all(self.db.read()),
        )
        .await
    }

    /// Insert a new comment (held for moderation).
    pub async fn create_comment(&self, data: &CreateComment) -> ApiResult<BlogComment> {
        fetch_first(
            query_as::<_, BlogComment>(
                "INSERT INTO blog_comments (post_id, user_id, content, parent_id) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING *",
            )
            .bind(data.post_id)
            .bind(&data.user_id)
            .bind(&data.content)
            .bind(data.parent_id)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }

    /// Approve a comment.
    ///
    /// Callers fetch the comment first; the row is guaranteed to exist.
    pub async fn approve_comment(&self, id: Uuid) -> ApiResult<BlogComment> {
        fetch_first(
            query_as::<_, BlogComment>(
                "UPDATE blog_comments SET approved = TRUE, updated_at = NOW() \
                 WHERE id = $1 RETURNING *",
            )
            .bind(id)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }

    /// Delete a comment, returning the deleted row.
    pub async fn delete_comment(&self, id: Uuid) -> ApiResult<BlogComment> {
        fetch_first(
            query_as::<_, BlogComment>("DELETE FROM blog_comments WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_all(self.db.write()),
            InteractionKind::Default,
        )
        .await
    }

    /// Run a count query. Counts always yield a row.
    async fn count(&self, sql: &str) -> Result<i64, ortus_core::ApiError> {
        Ok(fetch_first(
            query_scalar::<_, i64>(sql).fetch_all(self.db.read()),
            InteractionKind::Sequential,
        )
        .await?
        .into_data()
        .unwrap_or_default())
    }
}
