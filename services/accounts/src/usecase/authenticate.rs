use tracing::{info, warn};

use crate::domain::repository::UserRepository;
use crate::domain::types::UserWithRoles;
use crate::error::AccountsError;

// ── Authenticate ─────────────────────────────────────────────────────────────

pub struct AuthenticateInput {
    pub username: String,
    pub password: String,
}

pub struct AuthenticateUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> AuthenticateUseCase<R> {
    pub async fn execute(&self, input: AuthenticateInput) -> Result<UserWithRoles, AccountsError> {
        let Some(profile) = self.users.find_with_roles(&input.username).await? else {
            warn!(username = %input.username, "authentication failed: unknown user");
            return Err(AccountsError::UserNotFound);
        };
        if !profile.user.password_matches(&input.password) {
            warn!(username = %input.username, "authentication failed: bad credentials");
            return Err(AccountsError::InvalidCredentials);
        }
        info!(user_id = %profile.user.id, roles = profile.roles.len(), "user authenticated");
        Ok(profile)
    }
}
