use sea_orm::Database;
use tracing::{info, warn};

use rolelink_accounts::bootstrap::Bootstrap;
use rolelink_accounts::config::AccountsConfig;
use rolelink_accounts::router::build_router;
use rolelink_accounts::state::AppState;
use rolelink_accounts_migration::{Migrator, MigratorTrait};
use rolelink_core::config::Config;
use rolelink_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");
        info!("migrations applied");
    }

    let state = AppState { db };

    if config.seed_on_startup {
        match Bootstrap::from_state(&state).run().await {
            Ok(Some(profile)) => info!(
                username = %profile.user.username,
                roles = ?profile.role_names(),
                "bootstrap finished"
            ),
            Ok(None) => warn!("bootstrap finished without a successful authentication check"),
            Err(e) => panic!("bootstrap seeding failed: {e:?}"),
        }
    }

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
