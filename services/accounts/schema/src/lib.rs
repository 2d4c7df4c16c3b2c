//! SeaORM entities for the accounts record store.

pub mod roles;
pub mod user_roles;
pub mod users;
