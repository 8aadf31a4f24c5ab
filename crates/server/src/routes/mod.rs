//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /dashboard              - Stock and sales overview
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! POST /logout                 - Logout action
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/new           - New product form
//! POST /products               - Create product
//! GET  /products/{id}/edit     - Edit product form
//! POST /products/{id}          - Update product
//! POST /products/{id}/delete   - Delete product
//!
//! # Suppliers
//! GET  /suppliers              - Supplier listing
//! GET  /suppliers/new          - New supplier form
//! POST /suppliers              - Create supplier
//! GET  /suppliers/{id}         - Supplier details
//! GET  /suppliers/{id}/edit    - Edit supplier form
//! POST /suppliers/{id}         - Update supplier
//! POST /suppliers/{id}/delete  - Delete supplier (refused while referenced)
//!
//! # Customers
//! GET  /customers              - Customer listing
//! GET  /customers/new          - New customer form
//! POST /customers              - Create customer
//! GET  /customers/{id}/edit    - Edit customer form
//! POST /customers/{id}         - Update customer
//! POST /customers/{id}/delete  - Delete customer
//!
//! # Orders
//! GET  /orders                 - Order listing
//! GET  /orders/create          - Order creation form
//! POST /orders/create          - Create order (reserves stock)
//! GET  /orders/{id}            - Order details
//! POST /orders/{id}/status     - Update order status
//! POST /orders/{id}/delete     - Delete order (restores stock)
//! ```

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod home;
pub mod orders;
pub mod products;
pub mod suppliers;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for redirect messages.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Build a redirect path with a query-string message attached.
fn redirect_with_message(path: &str, key: &str, message: &str) -> String {
    let qs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, message)
        .finish();
    format!("{path}?{qs}")
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/new", get(products::new_page))
        .route("/{id}", post(products::update))
        .route("/{id}/edit", get(products::edit_page))
        .route("/{id}/delete", post(products::delete))
}

/// Create the supplier routes router.
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(suppliers::index).post(suppliers::create))
        .route("/new", get(suppliers::new_page))
        .route("/{id}", get(suppliers::show).post(suppliers::update))
        .route("/{id}/edit", get(suppliers::edit_page))
        .route("/{id}/delete", post(suppliers::delete))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::index).post(customers::create))
        .route("/new", get(customers::new_page))
        .route("/{id}", post(customers::update))
        .route("/{id}/edit", get(customers::edit_page))
        .route("/{id}/delete", post(customers::delete))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/create", get(orders::create_page).post(orders::create))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", post(orders::update_status))
        .route("/{id}/delete", post(orders::delete))
}

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/dashboard", get(dashboard::show))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .nest("/products", product_routes())
        .nest("/suppliers", supplier_routes())
        .nest("/customers", customer_routes())
        .nest("/orders", order_routes())
}
