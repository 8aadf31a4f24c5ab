//! Order service error types.

use thiserror::Error;

use pixel_haven_core::CustomerId;

use crate::db::RepositoryError;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The order doesn't exist.
    #[error("order not found")]
    OrderNotFound,

    /// The customer placing the order doesn't exist.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// A requested quantity exceeds the product's stock. Carries the
    /// product's name for the user-facing message.
    #[error("insufficient stock for {0}")]
    InsufficientStock(String),

    /// Every submitted line was skipped; there is nothing to order.
    #[error("no valid order lines")]
    NoValidLines,

    /// The status string is not one of the known statuses.
    #[error("invalid order status: {0}")]
    InvalidStatus(String),

    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for OrderError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}
