use std::sync::Mutex;

use sea_orm::{Database, DatabaseConnection};

use rolelink_accounts::domain::repository::{
    MembershipRepository, RoleRepository, UserRepository,
};
use rolelink_accounts::domain::types::{Role, RoleWithUsers, User, UserWithRoles};
use rolelink_accounts::error::AccountsError;
use rolelink_accounts::state::AppState;
use rolelink_accounts_migration::{Migrator, MigratorTrait};
use rolelink_domain::id::{RoleId, UserId};

// ── InMemoryStore ────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    roles: Vec<Role>,
    links: Vec<(UserId, RoleId)>,
}

/// Record store backed by plain vectors. Implements every repository trait,
/// so one store can be borrowed by several use cases.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_count(&self) -> usize {
        self.tables.lock().unwrap().links.len()
    }
}

impl UserRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountsError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_with_roles(&self, username: &str) -> Result<Option<UserWithRoles>, AccountsError> {
        let tables = self.tables.lock().unwrap();
        let Some(user) = tables.users.iter().find(|u| u.username == username).cloned() else {
            return Ok(None);
        };
        let mut roles: Vec<Role> = tables
            .roles
            .iter()
            .filter(|r| tables.links.contains(&(user.id, r.id)))
            .cloned()
            .collect();
        roles.sort_by_key(|r| r.id);
        Ok(Some(UserWithRoles { user, roles }))
    }

    async fn create(&self, user: &User) -> Result<(), AccountsError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(AccountsError::UserAlreadyExists);
        }
        tables.users.push(user.clone());
        Ok(())
    }
}

impl RoleRepository for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AccountsError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.roles.iter().find(|r| r.name == name).cloned())
    }

    async fn find_with_users(&self, name: &str) -> Result<Option<RoleWithUsers>, AccountsError> {
        let tables = self.tables.lock().unwrap();
        let Some(role) = tables.roles.iter().find(|r| r.name == name).cloned() else {
            return Ok(None);
        };
        let mut users: Vec<User> = tables
            .users
            .iter()
            .filter(|u| tables.links.contains(&(u.id, role.id)))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(Some(RoleWithUsers { role, users }))
    }

    async fn create(&self, name: &str) -> Result<Role, AccountsError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.roles.iter().any(|r| r.name == name) {
            return Err(AccountsError::RoleAlreadyExists);
        }
        let role = Role {
            id: RoleId(tables.roles.len() as i32 + 1),
            name: name.to_owned(),
            created_at: chrono::Utc::now(),
        };
        tables.roles.push(role.clone());
        Ok(role)
    }
}

impl MembershipRepository for InMemoryStore {
    async fn assign(&self, username: &str, role_name: &str) -> Result<(), AccountsError> {
        let mut tables = self.tables.lock().unwrap();
        let user_id = tables
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id)
            .ok_or(AccountsError::UserNotFound)?;
        let role_id = tables
            .roles
            .iter()
            .find(|r| r.name == role_name)
            .map(|r| r.id)
            .ok_or(AccountsError::RoleNotFound)?;
        if !tables.links.contains(&(user_id, role_id)) {
            tables.links.push((user_id, role_id));
        }
        Ok(())
    }
}

// ── SQLite fixtures ──────────────────────────────────────────────────────────

/// Fresh in-memory SQLite database with all migrations applied.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to connect to in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");
    db
}

pub async fn setup_state() -> AppState {
    AppState {
        db: setup_db().await,
    }
}

pub fn sorted(mut names: Vec<&str>) -> Vec<&str> {
    names.sort_unstable();
    names
}
