//! Startup seeding: demo users and roles, their links, and one
//! authentication check whose outcome is logged.

use tracing::{info, warn};

use crate::domain::repository::{MembershipRepository, RoleRepository, UserRepository};
use crate::domain::types::{Role, User, UserWithRoles};
use crate::error::AccountsError;
use crate::infra::db::{DbMembershipRepository, DbRoleRepository, DbUserRepository};
use crate::state::AppState;
use crate::usecase::authenticate::{AuthenticateInput, AuthenticateUseCase};
use crate::usecase::membership::AssignRoleUseCase;
use crate::usecase::role::CreateRoleUseCase;
use crate::usecase::user::{CreateUserInput, CreateUserUseCase};

/// `(username, password)` pairs created on startup.
pub const SEED_USERS: &[(&str, &str)] = &[("user1", "123456"), ("user2", "123456")];

pub const SEED_ROLES: &[&str] = &["STUDENT", "USER", "ADMIN"];

/// `(username, role_name)` links created on startup.
pub const SEED_LINKS: &[(&str, &str)] = &[
    ("user1", "STUDENT"),
    ("user1", "USER"),
    ("user2", "USER"),
    ("user2", "ADMIN"),
];

/// Credentials checked after seeding.
pub const CHECK_CREDENTIALS: (&str, &str) = ("user1", "123456");

pub struct Bootstrap<U, R, M>
where
    U: UserRepository,
    R: RoleRepository,
    M: MembershipRepository,
{
    pub users: U,
    pub roles: R,
    pub memberships: M,
}

impl Bootstrap<DbUserRepository, DbRoleRepository, DbMembershipRepository> {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            users: state.user_repo(),
            roles: state.role_repo(),
            memberships: state.membership_repo(),
        }
    }
}

impl<U, R, M> Bootstrap<U, R, M>
where
    U: UserRepository,
    R: RoleRepository,
    M: MembershipRepository,
{
    /// Seed, then run the authentication check. A failed check is logged and
    /// reported as `None`; a failed seed is returned as an error.
    pub async fn run(&self) -> Result<Option<UserWithRoles>, AccountsError> {
        self.seed().await?;
        let (username, password) = CHECK_CREDENTIALS;
        let usecase = AuthenticateUseCase { users: &self.users };
        let input = AuthenticateInput {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        match usecase.execute(input).await {
            Ok(profile) => {
                info!(
                    user_id = %profile.user.id,
                    username = %profile.user.username,
                    "bootstrap authentication succeeded"
                );
                for role in &profile.roles {
                    info!(role_id = %role.id, role_name = %role.name, "bootstrap user role");
                }
                Ok(Some(profile))
            }
            Err(e) => {
                warn!(error = %e, username, "bootstrap authentication failed");
                Ok(None)
            }
        }
    }

    /// Create the demo users and roles that are missing and link them.
    /// Safe to repeat against an already seeded store.
    pub async fn seed(&self) -> Result<(), AccountsError> {
        for (username, password) in SEED_USERS {
            self.ensure_user(username, password).await?;
        }
        for name in SEED_ROLES {
            self.ensure_role(name).await?;
        }
        let assign = AssignRoleUseCase {
            memberships: &self.memberships,
        };
        for (username, role_name) in SEED_LINKS {
            assign.execute(username, role_name).await?;
        }
        info!(
            users = SEED_USERS.len(),
            roles = SEED_ROLES.len(),
            links = SEED_LINKS.len(),
            "bootstrap seed complete"
        );
        Ok(())
    }

    async fn ensure_user(&self, username: &str, password: &str) -> Result<User, AccountsError> {
        if let Some(existing) = self.users.find_by_username(username).await? {
            return Ok(existing);
        }
        CreateUserUseCase { repo: &self.users }
            .execute(CreateUserInput {
                username: username.to_owned(),
                password: password.to_owned(),
            })
            .await
    }

    async fn ensure_role(&self, name: &str) -> Result<Role, AccountsError> {
        if let Some(existing) = self.roles.find_by_name(name).await? {
            return Ok(existing);
        }
        CreateRoleUseCase { repo: &self.roles }.execute(name).await
    }
}
