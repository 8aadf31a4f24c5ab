//! Order service: the stock-reserving order engine.
//!
//! Every operation runs in a single transaction, so any failure leaves the
//! store exactly as it was. Order creation is two-phase: a validation pass
//! decides the outcome, then a commit pass applies conditional stock
//! decrements and re-checks the affected-row count, which closes the window
//! where a concurrent order could take the same stock.

mod error;

pub use error::OrderError;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use pixel_haven_core::{CustomerId, EmployeeId, OrderId, OrderStatus, ProductId};

use crate::db::parse_decimal;

/// One requested order line, in form submission order.
#[derive(Debug, Clone, Copy)]
pub struct OrderLineInput {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Why a line was left out of the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No product with the given ID exists.
    UnknownProduct,
    /// Quantity was zero or negative.
    NonPositiveQuantity,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProduct => f.write_str("unknown product"),
            Self::NonPositiveQuantity => f.write_str("quantity must be positive"),
        }
    }
}

/// A line that was skipped during order creation.
#[derive(Debug, Clone, Copy)]
pub struct SkippedLine {
    pub product_id: ProductId,
    pub quantity: i64,
    pub reason: SkipReason,
}

/// Result of a successful order creation.
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub id: OrderId,
    pub total: Decimal,
    /// Lines that were dropped (unknown product or bad quantity), in input
    /// order. Surfaced to the caller as warnings alongside success.
    pub skipped: Vec<SkippedLine>,
}

struct PreparedLine {
    product_id: ProductId,
    product_name: String,
    quantity: i64,
    unit_price: Decimal,
}

/// Order service over the connection pool.
pub struct OrderService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an order, reserving stock for every line.
    ///
    /// Lines are processed in input order. Lines with an unknown product or
    /// a non-positive quantity are skipped and reported; a line whose
    /// quantity exceeds stock aborts the whole order. The stored total is
    /// the sum of `unit_price x quantity` over the accepted lines, with
    /// unit prices snapshotted at creation time.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::CustomerNotFound` if the customer doesn't exist.
    /// Returns `OrderError::InsufficientStock` if any line exceeds stock;
    /// nothing is persisted.
    /// Returns `OrderError::NoValidLines` if every line was skipped.
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        employee_id: EmployeeId,
        lines: &[OrderLineInput],
    ) -> Result<CreatedOrder, OrderError> {
        let mut tx = self.pool.begin().await?;

        let customer: Option<i64> = sqlx::query_scalar("SELECT id FROM customer WHERE id = ?")
            .bind(customer_id)
            .fetch_optional(&mut *tx)
            .await?;
        if customer.is_none() {
            return Err(OrderError::CustomerNotFound(customer_id));
        }

        // Validation pass: decide the outcome before touching any stock.
        let mut prepared: Vec<PreparedLine> = Vec::with_capacity(lines.len());
        let mut skipped: Vec<SkippedLine> = Vec::new();
        let mut total = Decimal::ZERO;

        for line in lines {
            if line.quantity <= 0 {
                skipped.push(SkippedLine {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    reason: SkipReason::NonPositiveQuantity,
                });
                continue;
            }

            let row: Option<(String, String, i64)> = sqlx::query_as(
                "SELECT name, price, stock_quantity FROM product WHERE id = ?",
            )
            .bind(line.product_id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some((name, price, stock)) = row else {
                skipped.push(SkippedLine {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    reason: SkipReason::UnknownProduct,
                });
                continue;
            };

            if stock < line.quantity {
                // Transaction drops here, rolling back.
                return Err(OrderError::InsufficientStock(name));
            }

            let unit_price = parse_decimal(&price, "product.price")?;
            total += unit_price * Decimal::from(line.quantity);
            prepared.push(PreparedLine {
                product_id: line.product_id,
                product_name: name,
                quantity: line.quantity,
                unit_price,
            });
        }

        if prepared.is_empty() {
            return Err(OrderError::NoValidLines);
        }

        // Commit pass: conditional decrements, re-checked per row so a
        // concurrent writer can't take the same stock between the passes.
        for line in &prepared {
            let result = sqlx::query(
                r"
                UPDATE product
                SET stock_quantity = stock_quantity - ?1
                WHERE id = ?2 AND stock_quantity >= ?1
                ",
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(OrderError::InsufficientStock(line.product_name.clone()));
            }
        }

        let order_id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO orders (order_date, total_amount, status, customer_id, employee_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            ",
        )
        .bind(Utc::now())
        .bind(total.to_string())
        .bind(OrderStatus::Pending.as_str())
        .bind(customer_id)
        .bind(employee_id)
        .fetch_one(&mut *tx)
        .await?;

        for line in &prepared {
            sqlx::query(
                r"
                INSERT INTO order_items (quantity, unit_price, order_id, product_id)
                VALUES (?, ?, ?, ?)
                ",
            )
            .bind(line.quantity)
            .bind(line.unit_price.to_string())
            .bind(order_id)
            .bind(line.product_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let id = OrderId::new(order_id);
        tracing::info!(order_id = %id, %total, skipped = skipped.len(), "order created");

        Ok(CreatedOrder { id, total, skipped })
    }

    /// Delete an order, restoring stock for its lines.
    ///
    /// Stock restoration silently skips products that no longer exist, so
    /// deleting an old order never fails on a pruned catalog.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::OrderNotFound` if the order doesn't exist.
    pub async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM orders WHERE id = ?")
            .bind(order_id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(OrderError::OrderNotFound);
        }

        let lines: Vec<(i64, i64)> =
            sqlx::query_as("SELECT product_id, quantity FROM order_items WHERE order_id = ?")
                .bind(order_id)
                .fetch_all(&mut *tx)
                .await?;

        for (product_id, quantity) in lines {
            let result = sqlx::query(
                "UPDATE product SET stock_quantity = stock_quantity + ? WHERE id = ?",
            )
            .bind(quantity)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                tracing::warn!(
                    %order_id,
                    product_id,
                    quantity,
                    "product deleted since ordering; stock not restored"
                );
            }
        }

        // order_items cascade with the header.
        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(order_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(%order_id, "order deleted");

        Ok(())
    }

    /// Update an order's status.
    ///
    /// The status string is parsed against the closed status set; there is
    /// no transition graph, any known status can follow any other.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::InvalidStatus` if the string is not a known status.
    /// Returns `OrderError::OrderNotFound` if the order doesn't exist.
    pub async fn update_status(
        &self,
        order_id: OrderId,
        status_str: &str,
    ) -> Result<OrderStatus, OrderError> {
        let status: OrderStatus = status_str
            .parse()
            .map_err(|_| OrderError::InvalidStatus(status_str.to_owned()))?;

        let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(order_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(OrderError::OrderNotFound);
        }

        Ok(status)
    }
}
