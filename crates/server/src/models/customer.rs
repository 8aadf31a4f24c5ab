//! Customer model.

use serde::{Deserialize, Serialize};

use pixel_haven_core::{CustomerId, Email};

/// A customer who places orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer's database ID.
    pub id: CustomerId,
    /// Full name.
    pub name: String,
    /// Email address. Unique across customers.
    pub email: Email,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Shipping address.
    pub address: Option<String>,
}
