//! Dashboard analytics queries.
//!
//! Counts come straight from SQL; price buckets are computed in Rust because
//! prices are stored as decimal strings and never compared in SQL.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use super::{RepositoryError, parse_decimal};

/// Products with stock below this count as "low stock".
const LOW_STOCK_THRESHOLD: i64 = 10;

/// Product count for one category.
#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Product counts by price bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceRangeCounts {
    /// price < 50
    pub under_50: i64,
    /// 50 <= price < 100
    pub from_50_to_100: i64,
    /// 100 <= price < 200
    pub from_100_to_200: i64,
    /// price >= 200
    pub over_200: i64,
}

/// Aggregated numbers for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub product_count: i64,
    pub customer_count: i64,
    pub order_count: i64,
    pub low_stock_count: i64,
    pub category_counts: Vec<CategoryCount>,
    pub price_ranges: PriceRangeCounts,
}

/// Load all dashboard statistics.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a query fails.
/// Returns `RepositoryError::DataCorruption` if a stored price is invalid.
pub async fn dashboard_stats(pool: &SqlitePool) -> Result<DashboardStats, RepositoryError> {
    let product_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
        .fetch_one(pool)
        .await?;
    let customer_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
        .fetch_one(pool)
        .await?;
    let order_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    let low_stock_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM product WHERE stock_quantity < ?")
            .bind(LOW_STOCK_THRESHOLD)
            .fetch_one(pool)
            .await?;

    let category_counts = sqlx::query_as::<_, (String, i64)>(
        r"
        SELECT category, COUNT(*)
        FROM product
        WHERE category IS NOT NULL
        GROUP BY category
        ORDER BY COUNT(*) DESC, category
        ",
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(category, count)| CategoryCount { category, count })
    .collect();

    let prices: Vec<String> = sqlx::query_scalar("SELECT price FROM product")
        .fetch_all(pool)
        .await?;

    let mut parsed = Vec::with_capacity(prices.len());
    for raw in &prices {
        parsed.push(parse_decimal(raw, "product.price")?);
    }
    let price_ranges = bucket_prices(&parsed);

    Ok(DashboardStats {
        product_count,
        customer_count,
        order_count,
        low_stock_count,
        category_counts,
        price_ranges,
    })
}

fn bucket_prices(prices: &[Decimal]) -> PriceRangeCounts {
    let mut counts = PriceRangeCounts::default();
    for price in prices {
        if *price < Decimal::from(50) {
            counts.under_50 += 1;
        } else if *price < Decimal::from(100) {
            counts.from_50_to_100 += 1;
        } else if *price < Decimal::from(200) {
            counts.from_100_to_200 += 1;
        } else {
            counts.over_200 += 1;
        }
    }
    counts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_prices() {
        let prices: Vec<Decimal> = ["44.99", "99.99", "129.99", "199.99", "1599.99", "50.00"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let counts = bucket_prices(&prices);
        assert_eq!(
            counts,
            PriceRangeCounts {
                under_50: 1,
                from_50_to_100: 2,
                from_100_to_200: 2,
                over_200: 1,
            }
        );
    }

    #[test]
    fn test_bucket_prices_empty() {
        assert_eq!(bucket_prices(&[]), PriceRangeCounts::default());
    }
}
