//! Supplier repository for database operations.

use sqlx::SqlitePool;

use pixel_haven_core::SupplierId;

use super::RepositoryError;
use crate::models::Supplier;

/// Fields for creating or updating a supplier.
#[derive(Debug, Clone)]
pub struct SupplierInput {
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(sqlx::FromRow)]
struct SupplierRow {
    id: SupplierId,
    name: String,
    contact_email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            contact_email: row.contact_email,
            phone: row.phone,
            address: row.address,
        }
    }
}

/// Repository for supplier database operations.
pub struct SupplierRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SupplierRepository<'a> {
    /// Create a new supplier repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all suppliers, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Supplier>, RepositoryError> {
        let rows = sqlx::query_as::<_, SupplierRow>(
            "SELECT id, name, contact_email, phone, address FROM supplier ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    /// Get a supplier by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: SupplierId) -> Result<Option<Supplier>, RepositoryError> {
        let row = sqlx::query_as::<_, SupplierRow>(
            "SELECT id, name, contact_email, phone, address FROM supplier WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Supplier::from))
    }

    /// Count the products sourced from a supplier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn product_count(&self, id: SupplierId) -> Result<i64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM product WHERE supplier_id = ?")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Create a new supplier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &SupplierInput) -> Result<SupplierId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO supplier (name, contact_email, phone, address)
            VALUES (?, ?, ?, ?)
            RETURNING id
            ",
        )
        .bind(&input.name)
        .bind(&input.contact_email)
        .bind(&input.phone)
        .bind(&input.address)
        .fetch_one(self.pool)
        .await?;

        Ok(SupplierId::new(id))
    }

    /// Update an existing supplier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the supplier doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: SupplierId,
        input: &SupplierInput,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE supplier
            SET name = ?, contact_email = ?, phone = ?, address = ?
            WHERE id = ?
            ",
        )
        .bind(&input.name)
        .bind(&input.contact_email)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a supplier, refusing while products still reference it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if products are still sourced
    /// from this supplier.
    /// Returns `RepositoryError::NotFound` if the supplier doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: SupplierId) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let product_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM product WHERE supplier_id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if product_count > 0 {
            return Err(RepositoryError::Conflict(format!(
                "{product_count} products still reference this supplier"
            )));
        }

        let result = sqlx::query("DELETE FROM supplier WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}
