use anyhow::Context as _;
use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, TransactionError, TransactionTrait, sea_query::OnConflict,
};

use rolelink_accounts_schema::{roles, user_roles, users};
use rolelink_domain::id::{RoleId, UserId};

use crate::domain::repository::{MembershipRepository, RoleRepository, UserRepository};
use crate::domain::types::{Role, RoleWithUsers, User, UserWithRoles};
use crate::error::AccountsError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AccountsError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_with_roles(&self, username: &str) -> Result<Option<UserWithRoles>, AccountsError> {
        // one joined query: users LEFT JOIN user_roles LEFT JOIN roles
        let rows = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .find_with_related(roles::Entity)
            .all(&self.db)
            .await
            .context("find user with roles")?;
        Ok(rows.into_iter().next().map(|(user, roles)| {
            let mut roles: Vec<Role> = roles.into_iter().map(role_from_model).collect();
            roles.sort_by_key(|r| r.id);
            UserWithRoles {
                user: user_from_model(user),
                roles,
            }
        }))
    }

    async fn create(&self, user: &User) -> Result<(), AccountsError> {
        users::ActiveModel {
            id: Set(user.id.0),
            username: Set(user.username.clone()),
            password: Set(user.password.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, AccountsError::UserAlreadyExists, "create user"))?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        username: model.username,
        password: model.password,
        created_at: model.created_at,
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AccountsError> {
        let model = roles::Entity::find()
            .filter(roles::Column::RoleName.eq(name))
            .one(&self.db)
            .await
            .context("find role by name")?;
        Ok(model.map(role_from_model))
    }

    async fn find_with_users(&self, name: &str) -> Result<Option<RoleWithUsers>, AccountsError> {
        let rows = roles::Entity::find()
            .filter(roles::Column::RoleName.eq(name))
            .find_with_related(users::Entity)
            .all(&self.db)
            .await
            .context("find role with users")?;
        Ok(rows.into_iter().next().map(|(role, users)| {
            let mut users: Vec<User> = users.into_iter().map(user_from_model).collect();
            users.sort_by(|a, b| a.username.cmp(&b.username));
            RoleWithUsers {
                role: role_from_model(role),
                users,
            }
        }))
    }

    async fn create(&self, name: &str) -> Result<Role, AccountsError> {
        let model = roles::ActiveModel {
            role_name: Set(name.to_owned()),
            created_at: Set(now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| insert_error(e, AccountsError::RoleAlreadyExists, "create role"))?;
        Ok(role_from_model(model))
    }
}

fn role_from_model(model: roles::Model) -> Role {
    Role {
        id: RoleId(model.id),
        name: model.role_name,
        created_at: model.created_at,
    }
}

/// Current time at the store's timestamp precision (microseconds), so a
/// returned model compares equal to the one read back.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Unique-key violations become the given conflict error; anything else is internal.
fn insert_error(err: DbErr, conflict: AccountsError, what: &'static str) -> AccountsError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
        _ => AccountsError::Internal(anyhow::Error::new(err).context(what)),
    }
}

// ── Membership repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMembershipRepository {
    pub db: DatabaseConnection,
}

impl MembershipRepository for DbMembershipRepository {
    async fn assign(&self, username: &str, role_name: &str) -> Result<(), AccountsError> {
        let username = username.to_owned();
        let role_name = role_name.to_owned();
        self.db
            .transaction::<_, (), AccountsError>(|txn| {
                Box::pin(async move {
                    let user = users::Entity::find()
                        .filter(users::Column::Username.eq(username.as_str()))
                        .one(txn)
                        .await
                        .context("find user for role assignment")?
                        .ok_or(AccountsError::UserNotFound)?;
                    let role = roles::Entity::find()
                        .filter(roles::Column::RoleName.eq(role_name.as_str()))
                        .one(txn)
                        .await
                        .context("find role for role assignment")?
                        .ok_or(AccountsError::RoleNotFound)?;

                    // set semantics: an existing (user, role) pair is left as is
                    user_roles::Entity::insert(user_roles::ActiveModel {
                        user_id: Set(user.id),
                        role_id: Set(role.id),
                        created_at: Set(now()),
                    })
                    .on_conflict(
                        OnConflict::columns([
                            user_roles::Column::UserId,
                            user_roles::Column::RoleId,
                        ])
                        .do_nothing()
                        .to_owned(),
                    )
                    .exec_without_returning(txn)
                    .await
                    .context("insert user role")?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(err) => {
                    AccountsError::Internal(anyhow::Error::new(err).context("assign role"))
                }
                TransactionError::Transaction(err) => err,
            })
    }
}
