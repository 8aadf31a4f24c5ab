//! Integration tests for Pixel Haven.
//!
//! These tests drive a running server over HTTP, so they are all marked
//! `#[ignore]` and skipped by a plain `cargo test`.
//!
//! # Running Tests
//!
//! ```bash
//! # Migrate and seed a scratch database
//! PIXEL_HAVEN_DATABASE_URL=sqlite://scratch.db cargo run -p pixel-haven-cli -- migrate
//! PIXEL_HAVEN_DATABASE_URL=sqlite://scratch.db cargo run -p pixel-haven-cli -- seed
//!
//! # Start the server against it
//! PIXEL_HAVEN_DATABASE_URL=sqlite://scratch.db cargo run -p pixel-haven-server
//!
//! # Run the ignored tests
//! cargo test -p pixel-haven-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `PIXEL_HAVEN_BASE_URL` - Server base URL (default `http://localhost:8000`)
//! - `PIXEL_HAVEN_TEST_USERNAME` / `PIXEL_HAVEN_TEST_PASSWORD` - Login used by
//!   the tests (defaults match the seeded `admin` account)
