//! Status and role enums.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a status or role from an unknown string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown value: {0}")]
pub struct ParseStatusError(pub String);

/// Lifecycle status of an order.
///
/// This is a closed set: every boundary (forms, database rows, service calls)
/// parses into it, and unknown strings are rejected rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Newly created, not yet worked on.
    Pending,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Delivered and closed out.
    Completed,
}

impl OrderStatus {
    /// All statuses, in lifecycle order. Used to render status selectors.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Completed,
    ];

    /// The canonical string stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "completed" => Ok(Self::Completed),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// Role of an employee account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Full access, including account management.
    Admin,
    /// Day-to-day inventory and order work.
    Staff,
}

impl EmployeeRole {
    /// The canonical string stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmployeeRole {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_roundtrip() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_order_status_rejects_unknown() {
        let err = "cancelled".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("cancelled".to_owned()));
        assert!("Pending".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_status_serde() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::Processing);
    }

    #[test]
    fn test_employee_role_roundtrip() {
        assert_eq!("admin".parse::<EmployeeRole>().unwrap(), EmployeeRole::Admin);
        assert_eq!("staff".parse::<EmployeeRole>().unwrap(), EmployeeRole::Staff);
        assert!("manager".parse::<EmployeeRole>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderStatus::Shipped.to_string(), "shipped");
        assert_eq!(EmployeeRole::Staff.to_string(), "staff");
    }
}
