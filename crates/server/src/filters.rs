//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Currency formatting shared by the `money` filter.
fn format_money(value: impl Display) -> String {
    format!("${value:.2}")
}

/// Formats a monetary value with a currency sign and two decimals.
///
/// Usage in templates: `{{ product.price|money }}`
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(value))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_money_pads_to_two_decimals() {
        let price: Decimal = "1599.99".parse().unwrap();
        assert_eq!(format_money(price), "$1599.99");

        let whole: Decimal = "50".parse().unwrap();
        assert_eq!(format_money(whole), "$50.00");
    }
}
