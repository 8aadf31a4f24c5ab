//! Pixel Haven server library.
//!
//! Inventory and order management for a small PC-hardware shop. Employees
//! log in to manage products, suppliers, customers, and orders; a dashboard
//! summarizes stock and sales.
//!
//! The binary lives in `main.rs`; everything else is exposed as a library so
//! the CLI and integration tests can reuse the pool helpers, repositories,
//! and embedded migrations.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

/// Embedded database migrations (from `migrations/`).
///
/// Run via `ph-cli migrate` or directly in tests against in-memory `SQLite`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
