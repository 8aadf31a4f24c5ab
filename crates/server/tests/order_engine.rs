//! End-to-end tests for the order engine against an in-memory database.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use pixel_haven_core::{CustomerId, EmployeeId, OrderId, OrderStatus, ProductId};
use pixel_haven_server::MIGRATOR;
use pixel_haven_server::services::{OrderError, OrderLineInput, OrderService, SkipReason};

async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

async fn seed_employee(pool: &SqlitePool) -> EmployeeId {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (username, password_hash, role) VALUES ('clerk', 'x', 'staff') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    EmployeeId::new(id)
}

async fn seed_customer(pool: &SqlitePool, email: &str) -> CustomerId {
    let id: i64 =
        sqlx::query_scalar("INSERT INTO customer (name, email) VALUES ('Ada', ?) RETURNING id")
            .bind(email)
            .fetch_one(pool)
            .await
            .unwrap();
    CustomerId::new(id)
}

async fn seed_product(pool: &SqlitePool, name: &str, price: &str, stock: i64) -> ProductId {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO product (name, price, stock_quantity) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(price)
    .bind(stock)
    .fetch_one(pool)
    .await
    .unwrap();
    ProductId::new(id)
}

async fn stock_of(pool: &SqlitePool, product_id: ProductId) -> i64 {
    sqlx::query_scalar("SELECT stock_quantity FROM product WHERE id = ?")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn order_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn line(product_id: ProductId, quantity: i64) -> OrderLineInput {
    OrderLineInput {
        product_id,
        quantity,
    }
}

#[tokio::test]
async fn test_create_order_computes_total_and_reserves_stock() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;

    let created = OrderService::new(&pool)
        .create_order(customer, employee, &[line(gpu, 3)])
        .await
        .unwrap();

    assert_eq!(created.total, Decimal::from_str("150.00").unwrap());
    assert!(created.skipped.is_empty());
    assert_eq!(stock_of(&pool, gpu).await, 7);

    let (total, status): (String, String) =
        sqlx::query_as("SELECT total_amount, status FROM orders WHERE id = ?")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(total.parse::<Decimal>().unwrap(), created.total);
    assert_eq!(status, "pending");
}

#[tokio::test]
async fn test_create_order_snapshots_unit_price() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "999.99", 5).await;

    let created = OrderService::new(&pool)
        .create_order(customer, employee, &[line(gpu, 1)])
        .await
        .unwrap();

    sqlx::query("UPDATE product SET price = '1.00' WHERE id = ?")
        .bind(gpu)
        .execute(&pool)
        .await
        .unwrap();

    let unit_price: String =
        sqlx::query_scalar("SELECT unit_price FROM order_items WHERE order_id = ?")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(unit_price.parse::<Decimal>().unwrap(), Decimal::from_str("999.99").unwrap());
}

#[tokio::test]
async fn test_insufficient_stock_persists_nothing() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;
    let cpu = seed_product(&pool, "CPU", "30.00", 2).await;

    let err = OrderService::new(&pool)
        .create_order(customer, employee, &[line(gpu, 3), line(cpu, 5)])
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InsufficientStock(ref name) if name == "CPU"));
    // The earlier valid line must not have taken any stock.
    assert_eq!(stock_of(&pool, gpu).await, 10);
    assert_eq!(stock_of(&pool, cpu).await, 2);
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn test_duplicate_lines_jointly_exceeding_stock_roll_back() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;

    // Each line passes the validation pass on its own; the second
    // conditional decrement finds the stock already taken and aborts.
    let err = OrderService::new(&pool)
        .create_order(customer, employee, &[line(gpu, 6), line(gpu, 6)])
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InsufficientStock(ref name) if name == "GPU"));
    assert_eq!(stock_of(&pool, gpu).await, 10);
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn test_skipped_lines_are_reported_in_input_order() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;
    let missing = ProductId::new(9999);

    let created = OrderService::new(&pool)
        .create_order(
            customer,
            employee,
            &[line(missing, 1), line(gpu, 0), line(gpu, 2)],
        )
        .await
        .unwrap();

    assert_eq!(created.total, Decimal::from_str("100.00").unwrap());
    assert_eq!(created.skipped.len(), 2);
    assert_eq!(created.skipped[0].reason, SkipReason::UnknownProduct);
    assert_eq!(created.skipped[0].product_id, missing);
    assert_eq!(created.skipped[1].reason, SkipReason::NonPositiveQuantity);
    assert_eq!(stock_of(&pool, gpu).await, 8);
}

#[tokio::test]
async fn test_all_lines_invalid_creates_nothing() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;

    let err = OrderService::new(&pool)
        .create_order(
            customer,
            employee,
            &[line(ProductId::new(9999), 1), line(gpu, -3)],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::NoValidLines));
    assert_eq!(order_count(&pool).await, 0);
    assert_eq!(stock_of(&pool, gpu).await, 10);
}

#[tokio::test]
async fn test_unknown_customer_is_rejected() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;

    let err = OrderService::new(&pool)
        .create_order(CustomerId::new(42), employee, &[line(gpu, 1)])
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::CustomerNotFound(id) if id == CustomerId::new(42)));
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_order_restores_stock() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;
    let cpu = seed_product(&pool, "CPU", "30.00", 6).await;

    let service = OrderService::new(&pool);
    let created = service
        .create_order(customer, employee, &[line(gpu, 4), line(cpu, 2)])
        .await
        .unwrap();
    assert_eq!(stock_of(&pool, gpu).await, 6);
    assert_eq!(stock_of(&pool, cpu).await, 4);

    service.delete_order(created.id).await.unwrap();

    assert_eq!(stock_of(&pool, gpu).await, 10);
    assert_eq!(stock_of(&pool, cpu).await, 6);
    assert_eq!(order_count(&pool).await, 0);

    let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(items, 0);
}

#[tokio::test]
async fn test_delete_order_survives_removed_product() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;

    let service = OrderService::new(&pool);
    let created = service
        .create_order(customer, employee, &[line(gpu, 2)])
        .await
        .unwrap();

    sqlx::query("DELETE FROM product WHERE id = ?")
        .bind(gpu)
        .execute(&pool)
        .await
        .unwrap();

    // Restoration has nowhere to go, but the delete still succeeds.
    service.delete_order(created.id).await.unwrap();
    assert_eq!(order_count(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_missing_order() {
    let pool = test_pool().await;

    let err = OrderService::new(&pool)
        .delete_order(OrderId::new(123))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound));
}

#[tokio::test]
async fn test_update_status_accepts_known_statuses_only() {
    let pool = test_pool().await;
    let employee = seed_employee(&pool).await;
    let customer = seed_customer(&pool, "ada@example.com").await;
    let gpu = seed_product(&pool, "GPU", "50.00", 10).await;

    let service = OrderService::new(&pool);
    let created = service
        .create_order(customer, employee, &[line(gpu, 1)])
        .await
        .unwrap();

    let status = service.update_status(created.id, "shipped").await.unwrap();
    assert_eq!(status, OrderStatus::Shipped);

    let (stored_status, total): (String, String) =
        sqlx::query_as("SELECT status, total_amount FROM orders WHERE id = ?")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored_status, "shipped");
    // Only the status column changes.
    assert_eq!(total.parse::<Decimal>().unwrap(), created.total);

    let err = service
        .update_status(created.id, "teleported")
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidStatus(ref raw) if raw == "teleported"));

    let err = service
        .update_status(OrderId::new(999), "pending")
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound));
}
