//! Supplier route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use pixel_haven_core::SupplierId;

use crate::db::RepositoryError;
use crate::db::suppliers::{SupplierInput, SupplierRepository};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::Supplier;
use crate::state::AppState;

use super::{MessageQuery, redirect_with_message};

/// Supplier form data.
#[derive(Debug, Deserialize)]
pub struct SupplierForm {
    pub name: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
}

/// Supplier listing template.
#[derive(Template, WebTemplate)]
#[template(path = "suppliers/index.html")]
pub struct SupplierListTemplate {
    pub suppliers: Vec<Supplier>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Supplier create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "suppliers/form.html")]
pub struct SupplierFormTemplate {
    /// `None` when creating a new supplier.
    pub supplier: Option<Supplier>,
    pub error: Option<String>,
    /// Form POST target.
    pub action: String,
}

/// Supplier details template.
#[derive(Template, WebTemplate)]
#[template(path = "suppliers/show.html")]
pub struct SupplierShowTemplate {
    pub supplier: Supplier,
    pub product_count: i64,
}

fn empty_to_none(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

impl SupplierForm {
    fn validate(self) -> Result<SupplierInput, String> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err("name is required".to_owned());
        }

        Ok(SupplierInput {
            name,
            contact_email: empty_to_none(self.contact_email),
            phone: empty_to_none(self.phone),
            address: empty_to_none(self.address),
        })
    }
}

/// List all suppliers.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let suppliers = SupplierRepository::new(state.pool()).list().await?;

    Ok(SupplierListTemplate {
        suppliers,
        error: query.error,
        success: query.success,
    }
    .into_response())
}

/// Display the new-supplier form.
pub async fn new_page(
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    SupplierFormTemplate {
        supplier: None,
        error: query.error,
        action: "/suppliers".to_owned(),
    }
}

/// Create a supplier.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Form(form): Form<SupplierForm>,
) -> Result<Response, AppError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(msg) => {
            return Ok(
                Redirect::to(&redirect_with_message("/suppliers/new", "error", &msg))
                    .into_response(),
            );
        }
    };

    SupplierRepository::new(state.pool()).create(&input).await?;

    Ok(
        Redirect::to(&redirect_with_message("/suppliers", "success", "supplier created"))
            .into_response(),
    )
}

/// Display supplier details.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<SupplierId>,
) -> Result<Response, AppError> {
    let repo = SupplierRepository::new(state.pool());
    let supplier = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("supplier {id}")))?;
    let product_count = repo.product_count(id).await?;

    Ok(SupplierShowTemplate {
        supplier,
        product_count,
    }
    .into_response())
}

/// Display the edit-supplier form.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<SupplierId>,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let supplier = SupplierRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("supplier {id}")))?;

    Ok(SupplierFormTemplate {
        action: format!("/suppliers/{id}"),
        supplier: Some(supplier),
        error: query.error,
    }
    .into_response())
}

/// Update a supplier.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<SupplierId>,
    Form(form): Form<SupplierForm>,
) -> Result<Response, AppError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(msg) => {
            return Ok(Redirect::to(&redirect_with_message(
                &format!("/suppliers/{id}/edit"),
                "error",
                &msg,
            ))
            .into_response());
        }
    };

    SupplierRepository::new(state.pool()).update(id, &input).await?;

    Ok(
        Redirect::to(&redirect_with_message("/suppliers", "success", "supplier updated"))
            .into_response(),
    )
}

/// Delete a supplier. Refused while products still reference it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<SupplierId>,
) -> Result<Response, AppError> {
    let target = match SupplierRepository::new(state.pool()).delete(id).await {
        Ok(()) => redirect_with_message("/suppliers", "success", "supplier deleted"),
        Err(RepositoryError::Conflict(_)) => redirect_with_message(
            "/suppliers",
            "error",
            "cannot delete a supplier that still has products",
        ),
        Err(RepositoryError::NotFound) => {
            redirect_with_message("/suppliers", "error", "supplier not found")
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Redirect::to(&target).into_response())
}
