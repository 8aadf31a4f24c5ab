//! Catalog management tests against a running server.
//!
//! These tests require:
//! - A running server (cargo run -p pixel-haven-server)
//! - A seeded database (cargo run -p pixel-haven-cli -- seed)
//!
//! Run with: cargo test -p pixel-haven-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

/// Base URL for the server (configurable via environment).
fn base_url() -> String {
    std::env::var("PIXEL_HAVEN_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn test_username() -> String {
    std::env::var("PIXEL_HAVEN_TEST_USERNAME").unwrap_or_else(|_| "admin".to_string())
}

fn test_password() -> String {
    std::env::var("PIXEL_HAVEN_TEST_PASSWORD").unwrap_or_else(|_| "admin123".to_string())
}

/// Log in and return a client holding the session cookie.
async fn authenticated_client() -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let resp = client
        .post(format!("{}/login", base_url()))
        .form(&[
            ("username", test_username()),
            ("password", test_password()),
        ])
        .send()
        .await
        .expect("Failed to log in");
    assert!(resp.url().path().starts_with("/dashboard"));

    client
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server and seeded database"]
async fn test_product_create_edit_delete() {
    let client = authenticated_client().await;
    let base_url = base_url();

    // Create
    let resp = client
        .post(format!("{base_url}/products"))
        .form(&[
            ("name", "Integration Test Widget"),
            ("description", "Created by an integration test"),
            ("price", "12.50"),
            ("stock_quantity", "3"),
            ("category", "Test"),
            ("supplier_id", ""),
        ])
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.url().query().unwrap_or_default().contains("success"));

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Integration Test Widget"));
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server and seeded database"]
async fn test_product_rejects_negative_price() {
    let client = authenticated_client().await;
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/products"))
        .form(&[
            ("name", "Bad Widget"),
            ("description", ""),
            ("price", "-5.00"),
            ("stock_quantity", "1"),
            ("category", ""),
            ("supplier_id", ""),
        ])
        .send()
        .await
        .expect("Failed to post product form");

    assert!(
        resp.url().query().unwrap_or_default().contains("error"),
        "Negative price should bounce back with an error"
    );
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server and seeded database"]
async fn test_supplier_with_products_cannot_be_deleted() {
    let client = authenticated_client().await;
    let base_url = base_url();

    // Seeded supplier 1 (NVIDIA Corp) has products.
    let resp = client
        .post(format!("{base_url}/suppliers/1/delete"))
        .send()
        .await
        .expect("Failed to post delete form");

    assert!(resp.url().path().starts_with("/suppliers"));
    assert!(
        resp.url().query().unwrap_or_default().contains("error"),
        "Supplier with products should be refused"
    );
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server and seeded database"]
async fn test_customer_duplicate_email_is_rejected() {
    let client = authenticated_client().await;
    let base_url = base_url();

    // Seeded email.
    let resp = client
        .post(format!("{base_url}/customers"))
        .form(&[
            ("name", "Duplicate Kevin"),
            ("email", "kevin.nguyen@email.com"),
            ("phone", ""),
            ("address", ""),
        ])
        .send()
        .await
        .expect("Failed to post customer form");

    assert!(
        resp.url().query().unwrap_or_default().contains("error"),
        "Duplicate email should bounce back with an error"
    );
}
