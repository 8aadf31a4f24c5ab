//! Employee repository for database operations.

use sqlx::SqlitePool;

use pixel_haven_core::{EmployeeId, EmployeeRole};

use super::RepositoryError;
use crate::models::Employee;

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: EmployeeId,
    username: String,
    role: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = RepositoryError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let role: EmployeeRole = row.role.parse().map_err(|_| {
            RepositoryError::DataCorruption(format!("invalid role in database: {}", row.role))
        })?;

        Ok(Self {
            id: row.id,
            username: row.username,
            role,
        })
    }
}

/// Repository for employee database operations.
pub struct EmployeeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployeeRepository<'a> {
    /// Create a new employee repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an employee by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored role is invalid.
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, username, role FROM employee WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Employee::try_from).transpose()
    }

    /// Get an employee and their password hash by username.
    ///
    /// Returns `None` if no employee has that username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored role is invalid.
    pub async fn get_with_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(Employee, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, (i64, String, String, String)>(
            "SELECT id, username, role, password_hash FROM employee WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        let Some((id, username, role, password_hash)) = row else {
            return Ok(None);
        };

        let role: EmployeeRole = role.parse().map_err(|_| {
            RepositoryError::DataCorruption(format!("invalid role in database: {role}"))
        })?;

        Ok(Some((
            Employee {
                id: EmployeeId::new(id),
                username,
                role,
            },
            password_hash,
        )))
    }

    /// Create a new employee with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: EmployeeRole,
    ) -> Result<Employee, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO employee (username, password_hash, role)
            VALUES (?, ?, ?)
            RETURNING id
            ",
        )
        .bind(username)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(Employee {
            id: EmployeeId::new(id),
            username: username.to_owned(),
            role,
        })
    }
}
