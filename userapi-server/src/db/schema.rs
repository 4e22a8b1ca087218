//! Schema creation for the users table

use sqlx::SqlitePool;

/// Create the users table and its indexes if they do not exist.
///
/// Safe to run on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    // rowid is kept (no WITHOUT ROWID) and gives insertion order for listings
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BLOB PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            roles TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)")
        .execute(pool)
        .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
