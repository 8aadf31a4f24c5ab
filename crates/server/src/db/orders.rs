//! Order repository: read accessors for list and detail views.
//!
//! Writes go through the order service, which owns the stock-adjusting
//! transactions.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use pixel_haven_core::{
    CustomerId, EmployeeId, OrderId, OrderLineId, OrderStatus, ProductId,
};

use super::{RepositoryError, parse_decimal};
use crate::models::{Order, OrderDetail, OrderLine, OrderSummary};

/// Placeholder name shown for lines whose product has since been deleted.
const DELETED_PRODUCT_NAME: &str = "(deleted product)";

#[derive(sqlx::FromRow)]
struct OrderSummaryRow {
    id: OrderId,
    order_date: DateTime<Utc>,
    total_amount: String,
    status: String,
    customer_name: Option<String>,
}

#[derive(sqlx::FromRow)]
struct OrderHeaderRow {
    id: OrderId,
    order_date: DateTime<Utc>,
    total_amount: String,
    status: String,
    customer_id: CustomerId,
    employee_id: EmployeeId,
    customer_name: Option<String>,
    employee_username: Option<String>,
}

#[derive(sqlx::FromRow)]
struct OrderLineRow {
    id: OrderLineId,
    product_id: ProductId,
    product_name: Option<String>,
    quantity: i64,
    unit_price: String,
}

fn parse_status(raw: &str) -> Result<OrderStatus, RepositoryError> {
    raw.parse().map_err(|_| {
        RepositoryError::DataCorruption(format!("invalid order status in database: {raw}"))
    })
}

/// Repository for order read operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders with customer names, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored total or status
    /// is invalid.
    pub async fn list(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderSummaryRow>(
            r"
            SELECT o.id, o.order_date, o.total_amount, o.status,
                   c.name AS customer_name
            FROM orders o
            LEFT JOIN customer c ON c.id = o.customer_id
            ORDER BY o.order_date DESC, o.id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(OrderSummary {
                    id: r.id,
                    order_date: r.order_date,
                    total_amount: parse_decimal(&r.total_amount, "orders.total_amount")?,
                    status: parse_status(&r.status)?,
                    customer_name: r.customer_name,
                })
            })
            .collect()
    }

    /// Get an order with its lines and display names.
    ///
    /// Customer and employee names are joined loosely: deleted records leave
    /// `None`, and lines whose product was removed get a placeholder name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored amount or status
    /// is invalid.
    pub async fn get_with_lines(
        &self,
        id: OrderId,
    ) -> Result<Option<OrderDetail>, RepositoryError> {
        let header = sqlx::query_as::<_, OrderHeaderRow>(
            r"
            SELECT o.id, o.order_date, o.total_amount, o.status,
                   o.customer_id, o.employee_id,
                   c.name AS customer_name, e.username AS employee_username
            FROM orders o
            LEFT JOIN customer c ON c.id = o.customer_id
            LEFT JOIN employee e ON e.id = o.employee_id
            WHERE o.id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let line_rows = sqlx::query_as::<_, OrderLineRow>(
            r"
            SELECT i.id, i.product_id, p.name AS product_name, i.quantity, i.unit_price
            FROM order_items i
            LEFT JOIN product p ON p.id = i.product_id
            WHERE i.order_id = ?
            ORDER BY i.id
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let mut lines = Vec::with_capacity(line_rows.len());
        for r in line_rows {
            lines.push(OrderLine {
                id: r.id,
                product_id: r.product_id,
                product_name: r
                    .product_name
                    .unwrap_or_else(|| DELETED_PRODUCT_NAME.to_owned()),
                quantity: r.quantity,
                unit_price: parse_decimal(&r.unit_price, "order_items.unit_price")?,
            });
        }

        let order = Order {
            id: header.id,
            order_date: header.order_date,
            total_amount: parse_decimal(&header.total_amount, "orders.total_amount")?,
            status: parse_status(&header.status)?,
            customer_id: header.customer_id,
            employee_id: header.employee_id,
        };

        Ok(Some(OrderDetail {
            order,
            customer_name: header.customer_name,
            employee_username: header.employee_username,
            lines,
        }))
    }
}
