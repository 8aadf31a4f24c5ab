//! Employee account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a new staff account
//! ph-cli employee create -u clerk -p 'a long password'
//!
//! # Create an admin account
//! ph-cli employee create -u boss -p 'a long password' -r admin
//! ```
//!
//! # Environment Variables
//!
//! - `PIXEL_HAVEN_DATABASE_URL` - `SQLite` connection string

use thiserror::Error;

use pixel_haven_core::EmployeeRole;
use pixel_haven_server::services::{AuthError, AuthService};

/// Errors that can occur during employee operations.
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: admin, staff")]
    InvalidRole(String),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Account creation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Create a new employee account.
///
/// The password is validated and hashed by the auth service; the plaintext
/// never touches the database.
pub async fn create(username: &str, password: &str, role: &str) -> Result<(), EmployeeError> {
    dotenvy::dotenv().ok();

    let role: EmployeeRole = role
        .parse()
        .map_err(|_| EmployeeError::InvalidRole(role.to_owned()))?;

    let database_url = super::database_url().map_err(EmployeeError::MissingEnvVar)?;

    tracing::info!("Connecting to database...");
    let pool = pixel_haven_server::db::create_pool(&database_url).await?;

    tracing::info!("Creating employee: {} ({})", username, role);
    let employee = AuthService::new(&pool)
        .create_employee(username, password, role)
        .await?;

    tracing::info!(
        "Employee created successfully! ID: {}, Username: {}, Role: {}",
        employee.id,
        employee.username,
        employee.role
    );

    Ok(())
}
