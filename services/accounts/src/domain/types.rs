use chrono::{DateTime, Utc};

use rolelink_domain::id::{RoleId, UserId};

/// User account as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Exact, case-sensitive comparison against the stored password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Named role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A user together with every role linked to it, ordered by role id.
#[derive(Debug, Clone)]
pub struct UserWithRoles {
    pub user: User,
    pub roles: Vec<Role>,
}

impl UserWithRoles {
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}

/// A role together with every user linked to it, ordered by username.
#[derive(Debug, Clone)]
pub struct RoleWithUsers {
    pub role: Role,
    pub users: Vec<User>,
}

impl RoleWithUsers {
    pub fn has_user(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }
}
