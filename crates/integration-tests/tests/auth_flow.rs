//! Login and session tests.
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

fn cookie_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log in and return a client holding the session cookie.
async fn authenticated_client() -> Client {
    let client = cookie_client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[
            ("username", test_username()),
            ("password", test_password()),
        ])
        .send()
        .await
        .expect("Failed to log in");

    // Redirects land on the dashboard.
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.url().path().starts_with("/dashboard"));

    client
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server"]
async fn test_login_page_renders() {
    let base_url = base_url();
    let resp = reqwest::get(format!("{base_url}/login"))
        .await
        .expect("Failed to get login page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("username"));
    assert!(body.contains("password"));
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server"]
async fn test_login_rejects_bad_credentials() {
    let client = cookie_client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("username", "admin"), ("password", "definitely-wrong")])
        .send()
        .await
        .expect("Failed to post login form");

    // Bounced back to the login page with an error message.
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.url().path().starts_with("/login"));
    assert!(resp.url().query().unwrap_or_default().contains("error"));
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server"]
async fn test_protected_pages_redirect_to_login() {
    let client = cookie_client();
    let base_url = base_url();

    for path in ["/dashboard", "/products", "/orders", "/customers"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to get protected page");

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.url().path().starts_with("/login"),
            "{path} should bounce to /login, landed on {}",
            resp.url().path()
        );
    }
}

#[tokio::test]
#[ignore = "Requires running pixel-haven server"]
async fn test_login_logout_round_trip() {
    let client = authenticated_client().await;
    let base_url = base_url();

    // Session grants access to a protected page.
    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get products page");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.url().path().starts_with("/products"));

    // Logout invalidates it.
    let resp = client
        .post(format!("{base_url}/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get products page after logout");
    assert!(resp.url().path().starts_with("/login"));
}
