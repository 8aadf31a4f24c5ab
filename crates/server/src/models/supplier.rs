//! Supplier model.

use serde::{Deserialize, Serialize};

use pixel_haven_core::SupplierId;

/// A supplier that products are sourced from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier's database ID.
    pub id: SupplierId,
    /// Company name.
    pub name: String,
    /// Sales/support contact address.
    pub contact_email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Mailing address.
    pub address: Option<String>,
}
