//! CLI command implementations.

pub mod employee;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;

/// Read the database connection string from the environment.
///
/// `PIXEL_HAVEN_DATABASE_URL` wins; `DATABASE_URL` is the fallback. The
/// error value is the variable name to report.
pub(crate) fn database_url() -> Result<SecretString, &'static str> {
    std::env::var("PIXEL_HAVEN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "PIXEL_HAVEN_DATABASE_URL")
}
