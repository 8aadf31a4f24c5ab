//! Product repository for database operations.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use pixel_haven_core::{ProductId, SupplierId};

use super::{RepositoryError, parse_decimal};
use crate::models::{Product, ProductWithSupplier};

/// Fields for creating or updating a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i64,
    pub category: Option<String>,
    pub supplier_id: Option<SupplierId>,
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: String,
    stock_quantity: i64,
    category: Option<String>,
    supplier_id: Option<SupplierId>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = parse_decimal(&row.price, "product.price")?;
        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
            stock_quantity: row.stock_quantity,
            category: row.category,
            supplier_id: row.supplier_id,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProductWithSupplierRow {
    #[sqlx(flatten)]
    product: ProductRow,
    supplier_name: Option<String>,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products with their supplier names, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price is invalid.
    pub async fn list(&self) -> Result<Vec<ProductWithSupplier>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductWithSupplierRow>(
            r"
            SELECT p.id, p.name, p.description, p.price, p.stock_quantity,
                   p.category, p.supplier_id, s.name AS supplier_name
            FROM product p
            LEFT JOIN supplier s ON s.id = p.supplier_id
            ORDER BY p.name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                Ok(ProductWithSupplier {
                    product: r.product.try_into()?,
                    supplier_name: r.supplier_name,
                })
            })
            .collect()
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored price is invalid.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, stock_quantity, category, supplier_id
            FROM product
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &ProductInput) -> Result<ProductId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO product (name, description, price, stock_quantity, category, supplier_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price.to_string())
        .bind(input.stock_quantity)
        .bind(&input.category)
        .bind(input.supplier_id)
        .fetch_one(self.pool)
        .await?;

        Ok(ProductId::new(id))
    }

    /// Update an existing product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: ProductId, input: &ProductInput) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE product
            SET name = ?, description = ?, price = ?, stock_quantity = ?,
                category = ?, supplier_id = ?
            WHERE id = ?
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price.to_string())
        .bind(input.stock_quantity)
        .bind(&input.category)
        .bind(input.supplier_id)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product.
    ///
    /// Historical order lines keep their snapshot of the product's price and
    /// are unaffected.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
