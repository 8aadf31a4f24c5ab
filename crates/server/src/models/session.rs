//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use pixel_haven_core::{EmployeeId, EmployeeRole};

/// Session-stored employee identity.
///
/// Minimal data stored in the session to identify the logged-in employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentEmployee {
    /// Employee's database ID.
    pub id: EmployeeId,
    /// Employee's login name.
    pub username: String,
    /// Employee's access role.
    pub role: EmployeeRole,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in employee.
    pub const CURRENT_EMPLOYEE: &str = "current_employee";
}
