//! Employee model.

use serde::{Deserialize, Serialize};

use pixel_haven_core::{EmployeeId, EmployeeRole};

/// An employee account.
///
/// The password hash is never carried on this struct; the repository exposes
/// it separately for credential verification only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Employee's database ID.
    pub id: EmployeeId,
    /// Login name. Unique across employees.
    pub username: String,
    /// Access role.
    pub role: EmployeeRole,
}
