//! Order route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, RawForm, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use pixel_haven_core::{CustomerId, OrderId, OrderStatus};

use crate::db::customers::CustomerRepository;
use crate::db::orders::OrderRepository;
use crate::db::products::ProductRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Customer, OrderDetail, OrderSummary, ProductWithSupplier};
use crate::services::{OrderError, OrderLineInput, OrderService};
use crate::state::AppState;

use super::{MessageQuery, redirect_with_message};

/// Status update form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Order listing template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrderListTemplate {
    pub orders: Vec<OrderSummary>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Order creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/new.html")]
pub struct OrderNewTemplate {
    pub customers: Vec<Customer>,
    pub products: Vec<ProductWithSupplier>,
    pub error: Option<String>,
}

/// Order details template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub detail: OrderDetail,
    pub statuses: [OrderStatus; 4],
    pub error: Option<String>,
    pub success: Option<String>,
}

/// List all orders.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let orders = OrderRepository::new(state.pool()).list().await?;

    Ok(OrderListTemplate {
        orders,
        error: query.error,
        success: query.success,
    }
    .into_response())
}

/// Display the order creation form.
pub async fn create_page(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let customers = CustomerRepository::new(state.pool()).list().await?;
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(OrderNewTemplate {
        customers,
        products,
        error: query.error,
    }
    .into_response())
}

/// The form submits parallel repeated keys (`product_ids` / `quantities`),
/// one pair per line row, which `Form` cannot represent. Parse the raw body
/// so line order is preserved.
fn parse_order_form(body: &[u8]) -> (Option<CustomerId>, Vec<OrderLineInput>, usize) {
    let mut customer_id: Option<CustomerId> = None;
    let mut product_ids: Vec<String> = Vec::new();
    let mut quantities: Vec<String> = Vec::new();

    for (key, value) in url::form_urlencoded::parse(body) {
        match key.as_ref() {
            "customer_id" => customer_id = value.parse().ok(),
            "product_ids" => product_ids.push(value.into_owned()),
            "quantities" => quantities.push(value.into_owned()),
            _ => {}
        }
    }

    let mut lines = Vec::new();
    let mut unparsed = 0usize;
    for (raw_product, raw_quantity) in product_ids.iter().zip(quantities.iter()) {
        match (raw_product.trim().parse(), raw_quantity.trim().parse()) {
            (Ok(product_id), Ok(quantity)) => lines.push(OrderLineInput {
                product_id,
                quantity,
            }),
            _ => unparsed += 1,
        }
    }

    (customer_id, lines, unparsed)
}

/// Create an order.
///
/// Engine failures come back as redirect messages on the form; skipped
/// lines surface as a warning on the details page.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(employee): RequireAuth,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let (customer_id, lines, unparsed) = parse_order_form(&body);

    let Some(customer_id) = customer_id else {
        return Ok(
            Redirect::to(&redirect_with_message("/orders/create", "error", "pick a customer"))
                .into_response(),
        );
    };

    if lines.is_empty() {
        return Ok(Redirect::to(&redirect_with_message(
            "/orders/create",
            "error",
            "add at least one product line",
        ))
        .into_response());
    }

    let service = OrderService::new(state.pool());
    match service.create_order(customer_id, employee.id, &lines).await {
        Ok(created) => {
            let skipped = created.skipped.len() + unparsed;
            let target = if skipped > 0 {
                redirect_with_message(
                    &format!("/orders/{}", created.id),
                    "error",
                    &format!("{skipped} invalid lines were skipped"),
                )
            } else {
                format!("/orders/{}", created.id)
            };
            Ok(Redirect::to(&target).into_response())
        }
        Err(OrderError::InsufficientStock(name)) => Ok(Redirect::to(&redirect_with_message(
            "/orders/create",
            "error",
            &format!("not enough stock for {name}"),
        ))
        .into_response()),
        Err(OrderError::NoValidLines) => Ok(Redirect::to(&redirect_with_message(
            "/orders/create",
            "error",
            "no valid order lines",
        ))
        .into_response()),
        Err(OrderError::CustomerNotFound(_)) => Ok(Redirect::to(&redirect_with_message(
            "/orders/create",
            "error",
            "customer not found",
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Display order details.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<OrderId>,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let detail = OrderRepository::new(state.pool())
        .get_with_lines(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(OrderShowTemplate {
        detail,
        statuses: OrderStatus::ALL,
        error: query.error,
        success: query.success,
    }
    .into_response())
}

/// Update an order's status.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<OrderId>,
    Form(form): Form<StatusForm>,
) -> Result<Response, AppError> {
    let service = OrderService::new(state.pool());

    match service.update_status(id, &form.status).await {
        Ok(status) => Ok(Redirect::to(&redirect_with_message(
            &format!("/orders/{id}"),
            "success",
            &format!("status set to {status}"),
        ))
        .into_response()),
        Err(OrderError::InvalidStatus(raw)) => Ok(Redirect::to(&redirect_with_message(
            &format!("/orders/{id}"),
            "error",
            &format!("unknown status: {raw}"),
        ))
        .into_response()),
        Err(OrderError::OrderNotFound) => Err(AppError::NotFound(format!("order {id}"))),
        Err(e) => Err(e.into()),
    }
}

/// Delete an order, restoring stock.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<OrderId>,
) -> Result<Response, AppError> {
    let service = OrderService::new(state.pool());

    match service.delete_order(id).await {
        Ok(()) => Ok(Redirect::to(&redirect_with_message(
            "/orders",
            "success",
            "order deleted and stock restored",
        ))
        .into_response()),
        Err(OrderError::OrderNotFound) => Err(AppError::NotFound(format!("order {id}"))),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_form_preserves_line_order() {
        let body = b"customer_id=3&product_ids=1&quantities=2&product_ids=5&quantities=1";
        let (customer_id, lines, unparsed) = parse_order_form(body);

        assert_eq!(customer_id, Some(CustomerId::new(3)));
        assert_eq!(unparsed, 0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_id.as_i64(), 1);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].product_id.as_i64(), 5);
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn test_parse_order_form_counts_unparsed_lines() {
        let body = b"customer_id=1&product_ids=abc&quantities=2&product_ids=4&quantities=xyz";
        let (customer_id, lines, unparsed) = parse_order_form(body);

        assert_eq!(customer_id, Some(CustomerId::new(1)));
        assert!(lines.is_empty());
        assert_eq!(unparsed, 2);
    }

    #[test]
    fn test_parse_order_form_missing_customer() {
        let body = b"product_ids=1&quantities=2";
        let (customer_id, lines, _) = parse_order_form(body);

        assert_eq!(customer_id, None);
        assert_eq!(lines.len(), 1);
    }
}
