//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;

use userapi_server::db::{create_pool, ensure_schema};
use userapi_server::http::server::DEFAULT_DATABASE_URL;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

/// Create the users table if it does not exist, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    ensure_schema(&pool)
        .await
        .context("Failed to create schema")?;

    pool.close().await;
    tracing::info!(database = %args.database_url, "Schema up to date");
    Ok(())
}
