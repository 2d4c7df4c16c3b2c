use tracing::info;

use crate::domain::repository::RoleRepository;
use crate::domain::types::{Role, RoleWithUsers};
use crate::error::AccountsError;

// ── CreateRole ───────────────────────────────────────────────────────────────

pub struct CreateRoleUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> CreateRoleUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<Role, AccountsError> {
        let role = self.repo.create(name).await?;
        info!(role_id = %role.id, role_name = %role.name, "role created");
        Ok(role)
    }
}

// ── GetRole ──────────────────────────────────────────────────────────────────

pub struct GetRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> GetRoleUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<RoleWithUsers, AccountsError> {
        self.roles
            .find_with_users(name)
            .await?
            .ok_or(AccountsError::RoleNotFound)
    }
}
