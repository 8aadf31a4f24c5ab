//! Database operations for the `SQLite` store.
//!
//! ## Tables
//!
//! - `employee` - Staff accounts and password hashes
//! - `supplier` - Companies products are sourced from
//! - `product` - Catalog with live stock counts
//! - `customer` - People who place orders
//! - `orders` / `order_items` - Order headers and their lines
//! - `tower_sessions` - Session storage (created by the session store)
//!
//! Money columns are stored as canonical decimal strings and parsed with
//! `rust_decimal`; all arithmetic happens in Rust.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p pixel-haven-cli -- migrate
//! ```

pub mod analytics;
pub mod customers;
pub mod employees;
pub mod orders;
pub mod products;
pub mod suppliers;

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use customers::CustomerRepository;
pub use employees::EmployeeRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use suppliers::SupplierRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// Enables WAL journaling, foreign keys, and a busy timeout so concurrent
/// writers queue instead of erroring. Creates the database file if missing.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string is invalid or the
/// database cannot be opened.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Parse a decimal string stored in the database.
///
/// Stored money values are written by us, so a parse failure means the row
/// was modified out-of-band.
pub(crate) fn parse_decimal(raw: &str, context: &str) -> Result<Decimal, RepositoryError> {
    raw.parse().map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid decimal in {context}: {e}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_valid() {
        assert_eq!(
            parse_decimal("1599.99", "product.price").unwrap(),
            Decimal::new(159_999, 2)
        );
        assert_eq!(parse_decimal("0", "product.price").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_decimal_invalid() {
        let err = parse_decimal("not-a-number", "product.price").unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
        assert!(err.to_string().contains("product.price"));
    }
}
