//! Business logic services.
//!
//! Services sit between route handlers and repositories: they own the
//! multi-step transactions and translate storage errors into
//! caller-meaningful ones.

pub mod auth;
pub mod orders;

pub use auth::{AuthError, AuthService};
pub use orders::{CreatedOrder, OrderError, OrderLineInput, OrderService, SkipReason, SkippedLine};
