use sea_orm_migration::prelude::*;

use decora_designs_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
