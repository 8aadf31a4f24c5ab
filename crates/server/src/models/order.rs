//! Order models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pixel_haven_core::{CustomerId, EmployeeId, OrderId, OrderLineId, OrderStatus, ProductId};

/// An order header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order's database ID.
    pub id: OrderId,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Derived sum of all line totals. Never edited directly.
    pub total_amount: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Customer who placed the order.
    pub customer_id: CustomerId,
    /// Employee who recorded the order.
    pub employee_id: EmployeeId,
}

/// One line of an order.
///
/// `unit_price` is a snapshot taken at order time; later price edits to the
/// product do not affect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: OrderLineId,
    pub product_id: ProductId,
    /// Product name at display time. Falls back to a placeholder when the
    /// product has since been deleted.
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl OrderLine {
    /// Line total (`unit_price` x quantity).
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An order row for list views, joined with the customer's name.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// `None` when the customer record has since been deleted.
    pub customer_name: Option<String>,
}

/// A fully loaded order for the details page.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: Order,
    /// `None` when the customer record has since been deleted.
    pub customer_name: Option<String>,
    /// `None` when the employee account has since been deleted.
    pub employee_username: Option<String>,
    pub lines: Vec<OrderLine>,
}
