//! Team member repository.

use sqlx::query_as;
use uuid::Uuid;

use ortus_core::interaction::{InteractionKind, fetch_all, fetch_first};
use ortus_core::result::ApiResult;
use ortus_entity::team::{CreateMember, Member};

use crate::connection::DatabasePool;

/// Repository for team member persistence.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    db: DatabasePool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Find a member by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> ApiResult<Member> {
        fetch_first(
            query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
                .bind(id)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// Find a member by external auth subject.
    pub async fn find_by_user_id(&self, user_id: &str) -> ApiResult<Member> {
        fetch_first(
            query_as::<_, Member>("SELECT * FROM members WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(self.db.read()),
            InteractionKind::Default,
        )
        .await
    }

    /// List all members, most recently updated first.
    pub async fn list_all(&self) -> ApiResult<Vec<Member>> {
        fetch_all(
            query_as::<_, Member>("SELECT * FROM members ORDER BY updated_at DESC")
                .fetch_all(self.db.read()),
        )
        .await
    }

    /// Insert a new member.
    pub async fn create(&self, data: &CreateMember) -> ApiResult<Member> {
        fetch_first(
            query_as::<_, Member>(
                "INSERT INTO members (user_id, role, title, description, join_date) \
                 VALUES ($1, $2, $3, $4, $5) \
                 RETURNING *",
            )
            .bind(&data.user_id)
            .bind(data.role)
            .bind(&data.title)
            .bind(&data.description)
            .bind(data.join_date)
            .fetch_all(self.db.write()),
            InteractionKind::Sequential,
        )
        .await
    }
}
