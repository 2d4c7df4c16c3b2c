use chrono::{SubsecRound, Utc};
use tracing::info;

use rolelink_domain::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, UserWithRoles};
use crate::error::AccountsError;

/// Fractional-second digits kept on stored timestamps (`timestamptz` precision).
const TIMESTAMP_PRECISION: u16 = 6;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: String,
    pub password: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, AccountsError> {
        let user = User {
            id: UserId::generate(),
            username: input.username,
            password: input.password,
            created_at: Utc::now().trunc_subsecs(TIMESTAMP_PRECISION),
        };
        self.repo.create(&user).await?;
        info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, username: &str) -> Result<UserWithRoles, AccountsError> {
        self.users
            .find_with_roles(username)
            .await?
            .ok_or(AccountsError::UserNotFound)
    }
}
