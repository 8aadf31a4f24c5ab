//! Product model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pixel_haven_core::{ProductId, SupplierId};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product's database ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Units currently in stock. Never negative.
    pub stock_quantity: i64,
    /// Free-form category label (e.g., "GPU", "Storage").
    pub category: Option<String>,
    /// Supplier this product is sourced from.
    pub supplier_id: Option<SupplierId>,
}

/// A product joined with its supplier's display name, for listings.
#[derive(Debug, Clone)]
pub struct ProductWithSupplier {
    pub product: Product,
    /// `None` when the product has no supplier set.
    pub supplier_name: Option<String>,
}
