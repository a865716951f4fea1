//! Team service — roster and member administration.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ortus_core::error::{ApiError, ErrorDetail};
use ortus_core::result::ApiResult;
use ortus_database::repositories::MemberRepository;
use ortus_entity::team::{CreateMember, Member};

use crate::viewer::Viewer;

/// Handles team roster reads and member administration.
#[derive(Debug, Clone)]
pub struct TeamService {
    /// Member repository.
    members: Arc<MemberRepository>,
}

impl TeamService {
    /// Creates a new team service.
    pub fn new(members: Arc<MemberRepository>) -> Self {
        Self { members }
    }

    /// Lists the team roster, most recently updated first.
    pub async fn roster(&self) -> ApiResult<Vec<Member>> {
        self.members.list_all().await
    }

    /// Gets a member profile.
    pub async fn get_member(&self, id: Uuid) -> ApiResult<Member> {
        self.members.find_by_id(id).await
    }

    /// Adds a new team member.
    pub async fn add_member(&self, input: CreateMember, viewer: &Viewer) -> ApiResult<Member> {
        if !viewer.can_moderate() {
            return Err(ApiError::authorisation(
                "Managing the team requires admin access",
            ));
        }

        match self.members.find_by_user_id(&input.user_id).await {
            Ok(_) => {
                return Err(ApiError::duplicate(format!(
                    "User '{}' is already a team member",
                    input.user_id
                )));
            }
            Err(err) if err.detail == ErrorDetail::NotFound => {}
            Err(err) => return Err(err),
        }

        let created = self.members.create(&input).await?;
        info!(user_id = %input.user_id, "Team member added");
        Ok(created)
    }
}
