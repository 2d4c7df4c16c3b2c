use serde::Deserialize;

use rolelink_core::config::Config;

/// Accounts service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AccountsConfig {
    /// SeaORM connection URL (default `sqlite::memory:`). Env var: `DATABASE_URL`.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `ACCOUNTS_PORT`.
    #[serde(default = "default_accounts_port")]
    pub accounts_port: u16,
    /// Apply pending migrations before serving. Env var: `RUN_MIGRATIONS`.
    #[serde(default = "default_true")]
    pub run_migrations: bool,
    /// Seed demo users and roles before serving. Env var: `SEED_ON_STARTUP`.
    #[serde(default = "default_true")]
    pub seed_on_startup: bool,
}

impl Config for AccountsConfig {}

fn default_database_url() -> String {
    "sqlite::memory:".to_owned()
}

fn default_accounts_port() -> u16 {
    3114
}

fn default_true() -> bool {
    true
}
