//! Seed the database with the sample catalog.
//!
//! Loads suppliers, products, customers, and two employee accounts into an
//! empty database. Refuses to run against a database that already has
//! suppliers, so it stays safe to call from setup scripts.
//!
//! # Environment Variables
//!
//! - `PIXEL_HAVEN_DATABASE_URL` - `SQLite` connection string

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use pixel_haven_core::EmployeeRole;
use pixel_haven_server::services::{AuthError, AuthService};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Employee account creation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// (name, contact_email, phone, address)
const SUPPLIERS: &[(&str, &str, &str, &str)] = &[
    ("NVIDIA Corp", "sales@nvidia.com", "1-800-NVIDIA", "2788 San Tomas Expressway, Santa Clara, CA"),
    ("Intel Corporation", "orders@intel.com", "1-800-538-3373", "2200 Mission College Blvd, Santa Clara, CA"),
    ("AMD Inc", "support@amd.com", "1-800-538-8450", "2485 Augustine Drive, Santa Clara, CA"),
    ("Corsair Memory", "sales@corsair.com", "1-888-222-4346", "47100 Bayside Parkway, Fremont, CA"),
    ("Samsung Electronics", "orders@samsung.com", "1-800-726-7864", "3655 N First St, San Jose, CA"),
    ("Western Digital", "support@wdc.com", "1-800-275-4932", "5601 Great Oaks Parkway, San Jose, CA"),
    ("Logitech", "sales@logitech.com", "1-646-454-3200", "7700 Gateway Blvd, Newark, CA"),
    ("ASUS", "orders@asus.com", "1-812-282-2787", "800 Corporate Way, Fremont, CA"),
    ("MSI", "support@msi.com", "1-626-271-1004", "901 Canada Court, City of Industry, CA"),
    ("Cooler Master", "sales@coolermaster.com", "1-909-595-7676", "17170 Rowland St, City of Industry, CA"),
    ("Gigabyte", "sales@gigabyte.com", "1-626-854-9338", "City of Industry, CA"),
    ("EVGA", "support@evga.com", "1-888-881-3842", "Brea, CA"),
];

/// (name, description, price, stock, category, 1-based supplier index)
const PRODUCTS: &[(&str, &str, &str, i64, &str, usize)] = &[
    ("NVIDIA RTX 4090", "Flagship gaming GPU with 24GB GDDR6X", "1599.99", 15, "GPU", 1),
    ("NVIDIA RTX 4080", "High-end gaming GPU with 16GB GDDR6X", "1199.99", 25, "GPU", 1),
    ("AMD RX 7900 XTX", "High-end AMD GPU with 24GB GDDR6", "999.99", 20, "GPU", 3),
    ("Intel Core i9-14900K", "24-core desktop processor", "589.99", 40, "CPU", 2),
    ("AMD Ryzen 9 7950X", "16-core desktop processor", "699.99", 35, "CPU", 3),
    ("Corsair Vengeance 32GB DDR5", "32GB DDR5 5600MHz memory kit", "129.99", 100, "Memory", 4),
    ("Samsung 980 Pro 2TB", "2TB NVMe PCIe 4.0 SSD", "179.99", 60, "Storage", 5),
    ("WD Black SN850X 2TB", "2TB NVMe PCIe 4.0 SSD", "169.99", 55, "Storage", 6),
    ("Logitech MX Master 3S", "Wireless performance mouse", "99.99", 75, "Peripherals", 7),
    ("ASUS ROG Swift Monitor", "27-inch 1440p gaming monitor", "699.99", 25, "Monitors", 8),
    ("MSI MAG B650 Tomahawk", "AMD AM5 motherboard", "219.99", 30, "Motherboard", 9),
    ("Cooler Master Hyper 212", "CPU air cooler", "44.99", 80, "Cooling", 10),
    ("Gigabyte AORUS PSU 850W", "80+ Gold power supply", "149.99", 40, "PSU", 11),
    ("EVGA RTX 4070 Super", "Mid-range gaming GPU", "599.99", 35, "GPU", 12),
];

/// (name, email, phone, address)
const CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("Kevin Nguyen", "kevin.nguyen@email.com", "555-0101", "123 Main St, New York, NY"),
    ("Sarah Holmes", "sarah.holmes@email.com", "555-0102", "456 Oak Ave, Los Angeles, CA"),
    ("Mikey Chen", "mikey.chen@email.com", "555-0103", "789 Pine Rd, Chicago, IL"),
    ("Emily Vu", "emily.vu@email.com", "555-0104", "321 Elm St, Houston, TX"),
    ("Shawn Wilson", "shawn.wilson@email.com", "555-0105", "654 Maple Dr, Phoenix, AZ"),
    ("Lisa Pink", "lisa.pink@email.com", "555-0106", "987 Cedar Ln, Philadelphia, PA"),
    ("Robert Taylor", "robert.taylor@email.com", "555-0107", "147 Birch Way, San Antonio, TX"),
    ("Jennifer Lee", "jennifer.lee@email.com", "555-0108", "258 Walnut St, San Diego, CA"),
    ("Thomas Miller", "thomas.miller@email.com", "555-0109", "369 Spruce Ave, Dallas, TX"),
    ("Naomi Garcia", "naomi.garcia@email.com", "555-0110", "741 Aspen Blvd, San Jose, CA"),
    ("Alex Johnson", "alex.johnson@email.com", "555-0111", "852 Palm St, Seattle, WA"),
    ("Maria Rodriguez", "maria.rodriguez@email.com", "555-0112", "963 Redwood Dr, Denver, CO"),
    ("David Kim", "david.kim@email.com", "555-0113", "159 Willow Ln, Boston, MA"),
];

/// Seed the sample catalog.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url().map_err(SeedError::MissingEnvVar)?;

    tracing::info!("Connecting to database...");
    let pool = pixel_haven_server::db::create_pool(&database_url).await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM supplier")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        info!("Database already has suppliers, nothing to do");
        return Ok(());
    }

    let supplier_ids = seed_suppliers(&pool).await?;
    seed_products(&pool, &supplier_ids).await?;
    seed_customers(&pool).await?;
    seed_employees(&pool).await?;

    info!("Seeding complete!");
    info!("  Suppliers: {}", SUPPLIERS.len());
    info!("  Products: {}", PRODUCTS.len());
    info!("  Customers: {}", CUSTOMERS.len());
    info!("  Employees: admin (role admin), staff1 (role staff)");

    Ok(())
}

async fn seed_suppliers(pool: &SqlitePool) -> Result<Vec<i64>, SeedError> {
    let mut ids = Vec::with_capacity(SUPPLIERS.len());
    for (name, email, phone, address) in SUPPLIERS {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO supplier (name, contact_email, phone, address)
            VALUES (?, ?, ?, ?)
            RETURNING id
            ",
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }
    Ok(ids)
}

async fn seed_products(pool: &SqlitePool, supplier_ids: &[i64]) -> Result<(), SeedError> {
    for (name, description, price, stock, category, supplier_index) in PRODUCTS {
        let supplier_id = supplier_ids.get(supplier_index - 1).copied();
        sqlx::query(
            r"
            INSERT INTO product (name, description, price, stock_quantity, category, supplier_id)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(stock)
        .bind(category)
        .bind(supplier_id)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn seed_customers(pool: &SqlitePool) -> Result<(), SeedError> {
    for (name, email, phone, address) in CUSTOMERS {
        sqlx::query(
            r"
            INSERT INTO customer (name, email, phone, address)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (email) DO NOTHING
            ",
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn seed_employees(pool: &SqlitePool) -> Result<(), SeedError> {
    let auth = AuthService::new(pool);
    auth.create_employee("admin", "admin123", EmployeeRole::Admin)
        .await?;
    auth.create_employee("staff1", "staff123", EmployeeRole::Staff)
        .await?;
    Ok(())
}
