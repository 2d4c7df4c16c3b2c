use tracing::info;

use crate::domain::repository::MembershipRepository;
use crate::error::AccountsError;

// ── AssignRole ───────────────────────────────────────────────────────────────

pub struct AssignRoleUseCase<M: MembershipRepository> {
    pub memberships: M,
}

impl<M: MembershipRepository> AssignRoleUseCase<M> {
    /// Link `username` to `role_name`. Missing users or roles are reported,
    /// never skipped.
    pub async fn execute(&self, username: &str, role_name: &str) -> Result<(), AccountsError> {
        self.memberships.assign(username, role_name).await?;
        info!(username, role_name, "role assigned");
        Ok(())
    }
}
