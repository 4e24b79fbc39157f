//! Migration CLI for the catalog schema
//!
//! Reads `DATABASE_URL`; run `cargo run -p migration -- up` (or `down`, `status`, `fresh`).

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
