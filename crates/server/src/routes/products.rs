//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use pixel_haven_core::{ProductId, SupplierId};

use crate::db::products::{ProductInput, ProductRepository};
use crate::db::suppliers::SupplierRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Product, ProductWithSupplier, Supplier};
use crate::state::AppState;

use super::{MessageQuery, redirect_with_message};

/// Product form data. Numeric fields arrive as strings and are validated
/// in the handler so bad input becomes a redirect message, not a 422.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
    pub category: String,
    pub supplier_id: String,
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductListTemplate {
    pub products: Vec<ProductWithSupplier>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Product create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    /// `None` when creating a new product.
    pub product: Option<Product>,
    pub suppliers: Vec<Supplier>,
    pub error: Option<String>,
    /// Form POST target.
    pub action: String,
}

fn empty_to_none(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

impl ProductForm {
    /// Validate the form into repository input.
    ///
    /// Returns a user-facing message on the first invalid field.
    fn validate(self) -> Result<ProductInput, String> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err("name is required".to_owned());
        }

        let price: Decimal = self
            .price
            .trim()
            .parse()
            .map_err(|_| "price must be a decimal number".to_owned())?;
        if price < Decimal::ZERO {
            return Err("price cannot be negative".to_owned());
        }

        let stock_quantity: i64 = self
            .stock_quantity
            .trim()
            .parse()
            .map_err(|_| "stock quantity must be a whole number".to_owned())?;
        if stock_quantity < 0 {
            return Err("stock quantity cannot be negative".to_owned());
        }

        let supplier_id = match empty_to_none(self.supplier_id) {
            None => None,
            Some(raw) => Some(
                raw.parse::<SupplierId>()
                    .map_err(|_| "invalid supplier".to_owned())?,
            ),
        };

        Ok(ProductInput {
            name,
            description: empty_to_none(self.description),
            price,
            stock_quantity,
            category: empty_to_none(self.category),
            supplier_id,
        })
    }
}

/// List all products.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(ProductListTemplate {
        products,
        error: query.error,
        success: query.success,
    }
    .into_response())
}

/// Display the new-product form.
pub async fn new_page(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let suppliers = SupplierRepository::new(state.pool()).list().await?;

    Ok(ProductFormTemplate {
        product: None,
        suppliers,
        error: query.error,
        action: "/products".to_owned(),
    }
    .into_response())
}

/// Create a product.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(msg) => {
            return Ok(
                Redirect::to(&redirect_with_message("/products/new", "error", &msg))
                    .into_response(),
            );
        }
    };

    ProductRepository::new(state.pool()).create(&input).await?;

    Ok(Redirect::to(&redirect_with_message("/products", "success", "product created"))
        .into_response())
}

/// Display the edit-product form.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<ProductId>,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let repo = ProductRepository::new(state.pool());
    let product = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    let suppliers = SupplierRepository::new(state.pool()).list().await?;

    Ok(ProductFormTemplate {
        action: format!("/products/{id}"),
        product: Some(product),
        suppliers,
        error: query.error,
    }
    .into_response())
}

/// Update a product.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<ProductId>,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(msg) => {
            return Ok(Redirect::to(&redirect_with_message(
                &format!("/products/{id}/edit"),
                "error",
                &msg,
            ))
            .into_response());
        }
    };

    ProductRepository::new(state.pool()).update(id, &input).await?;

    Ok(Redirect::to(&redirect_with_message("/products", "success", "product updated"))
        .into_response())
}

/// Delete a product.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<ProductId>,
) -> Result<Response, AppError> {
    let deleted = ProductRepository::new(state.pool()).delete(id).await?;

    let target = if deleted {
        redirect_with_message("/products", "success", "product deleted")
    } else {
        redirect_with_message("/products", "error", "product not found")
    };

    Ok(Redirect::to(&target).into_response())
}
