#![allow(async_fn_in_trait)]

use crate::domain::types::{Role, RoleWithUsers, User, UserWithRoles};
use crate::error::AccountsError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountsError>;

    /// The user and its roles (ordered by role id), read as one unit.
    async fn find_with_roles(&self, username: &str) -> Result<Option<UserWithRoles>, AccountsError>;

    /// Insert a new user. Fails with `UserAlreadyExists` when the username is taken.
    async fn create(&self, user: &User) -> Result<(), AccountsError>;
}

/// Repository for roles.
pub trait RoleRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AccountsError>;

    /// The role and its users (ordered by username), read as one unit.
    async fn find_with_users(&self, name: &str) -> Result<Option<RoleWithUsers>, AccountsError>;

    /// Insert a new role and return it with its store-assigned id.
    /// Fails with `RoleAlreadyExists` when the name is taken.
    async fn create(&self, name: &str) -> Result<Role, AccountsError>;
}

/// Writes to the user-role relation. Reads of either direction go through
/// `find_with_roles` / `find_with_users`, both derived from the same links.
pub trait MembershipRepository: Send + Sync {
    /// Resolve both names and link them in one atomic unit.
    /// Linking an already-linked pair succeeds without change.
    async fn assign(&self, username: &str, role_name: &str) -> Result<(), AccountsError>;
}

// Borrowed repositories, so one store can back several use cases at once.

impl<T: UserRepository> UserRepository for &T {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountsError> {
        (**self).find_by_username(username).await
    }

    async fn find_with_roles(
        &self,
        username: &str,
    ) -> Result<Option<UserWithRoles>, AccountsError> {
        (**self).find_with_roles(username).await
    }

    async fn create(&self, user: &User) -> Result<(), AccountsError> {
        (**self).create(user).await
    }
}

impl<T: RoleRepository> RoleRepository for &T {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AccountsError> {
        (**self).find_by_name(name).await
    }

    async fn find_with_users(&self, name: &str) -> Result<Option<RoleWithUsers>, AccountsError> {
        (**self).find_with_users(name).await
    }

    async fn create(&self, name: &str) -> Result<Role, AccountsError> {
        (**self).create(name).await
    }
}

impl<T: MembershipRepository> MembershipRepository for &T {
    async fn assign(&self, username: &str, role_name: &str) -> Result<(), AccountsError> {
        (**self).assign(username, role_name).await
    }
}
