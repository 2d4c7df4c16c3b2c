use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::{Role, UserWithRoles};
use crate::error::AccountsError;
use crate::state::AppState;
use crate::usecase::user::GetUserUseCase;

// ── GET /users/{username} ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub roles: Vec<UserRoleResponse>,
    #[serde(serialize_with = "rolelink_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct UserRoleResponse {
    pub id: i32,
    pub name: String,
}

impl From<Role> for UserRoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.0,
            name: role.name,
        }
    }
}

impl From<UserWithRoles> for UserResponse {
    fn from(profile: UserWithRoles) -> Self {
        Self {
            id: profile.user.id.to_string(),
            username: profile.user.username,
            roles: profile.roles.into_iter().map(Into::into).collect(),
            created_at: profile.user.created_at,
        }
    }
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AccountsError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    let profile = usecase.execute(&username).await?;
    Ok(Json(profile.into()))
}
