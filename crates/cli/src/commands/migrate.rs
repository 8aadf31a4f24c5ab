//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! ph-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `PIXEL_HAVEN_DATABASE_URL` - `SQLite` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! Migration files live in `crates/server/migrations/`.

use thiserror::Error;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending database migrations.
pub async fn run() -> Result<(), MigrateError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url().map_err(MigrateError::MissingEnvVar)?;

    tracing::info!("Connecting to database...");
    let pool = pixel_haven_server::db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    pixel_haven_server::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
