use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(rolelink_accounts_migration::Migrator).await;
}
