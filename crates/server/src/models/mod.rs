//! Domain models.

pub mod customer;
pub mod employee;
pub mod order;
pub mod product;
pub mod session;
pub mod supplier;

pub use customer::Customer;
pub use employee::Employee;
pub use order::{Order, OrderDetail, OrderLine, OrderSummary};
pub use product::{Product, ProductWithSupplier};
pub use session::{CurrentEmployee, session_keys};
pub use supplier::Supplier;
