use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::{RoleWithUsers, User};
use crate::error::AccountsError;
use crate::state::AppState;
use crate::usecase::role::GetRoleUseCase;

// ── GET /roles/{role_name} ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: i32,
    pub name: String,
    pub users: Vec<RoleMemberResponse>,
    #[serde(serialize_with = "rolelink_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct RoleMemberResponse {
    pub id: String,
    pub username: String,
}

impl From<User> for RoleMemberResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
        }
    }
}

impl From<RoleWithUsers> for RoleResponse {
    fn from(role: RoleWithUsers) -> Self {
        Self {
            id: role.role.id.0,
            name: role.role.name,
            users: role.users.into_iter().map(Into::into).collect(),
            created_at: role.role.created_at,
        }
    }
}

pub async fn get_role(
    State(state): State<AppState>,
    Path(role_name): Path<String>,
) -> Result<Json<RoleResponse>, AccountsError> {
    let usecase = GetRoleUseCase {
        roles: state.role_repo(),
    };
    let role = usecase.execute(&role_name).await?;
    Ok(Json(role.into()))
}
