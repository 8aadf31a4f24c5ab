//! Customer route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use pixel_haven_core::{CustomerId, Email};

use crate::db::RepositoryError;
use crate::db::customers::{CustomerInput, CustomerRepository};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::Customer;
use crate::state::AppState;

use super::{MessageQuery, redirect_with_message};

/// Customer form data.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Customer listing template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
pub struct CustomerListTemplate {
    pub customers: Vec<Customer>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Customer create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/form.html")]
pub struct CustomerFormTemplate {
    /// `None` when creating a new customer.
    pub customer: Option<Customer>,
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

impl CustomerForm {
    fn validate(self) -> Result<CustomerInput, String> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err("name is required".to_owned());
        }

        let email = Email::parse(self.email.trim()).map_err(|e| e.to_string())?;

        Ok(CustomerInput {
            name,
            email,
            phone: empty_to_none(self.phone),
            address: empty_to_none(self.address),
        })
    }
}

/// List all customers.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let customers = CustomerRepository::new(state.pool()).list().await?;

    Ok(CustomerListTemplate {
        customers,
        error: query.error,
        success: query.success,
    }
    .into_response())
}

/// Display the new-customer form.
pub async fn new_page(
    RequireAuth(_employee): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    CustomerFormTemplate {
        customer: None,
        error: query.error,
        action: "/customers".to_owned(),
    }
}

/// Create a customer. A duplicate email becomes a form message, not a 500.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Form(form): Form<CustomerForm>,
) -> Result<Response, AppError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(msg) => {
            return Ok(
                Redirect::to(&redirect_with_message("/customers/new", "error", &msg))
                    .into_response(),
            );
        }
    };

    match CustomerRepository::new(state.pool()).create(&input).await {
        Ok(_) => Ok(Redirect::to(&redirect_with_message(
            "/customers",
            "success",
            "customer created",
        ))
        .into_response()),
        Err(RepositoryError::Conflict(_)) => Ok(Redirect::to(&redirect_with_message(
            "/customers/new",
            "error",
            "a customer with this email already exists",
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Display the edit-customer form.
pub async fn edit_page(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<CustomerId>,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let customer = CustomerRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {id}")))?;

    Ok(CustomerFormTemplate {
        action: format!("/customers/{id}"),
        customer: Some(customer),
        error: query.error,
    }
    .into_response())
}

/// Update a customer.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<CustomerId>,
    Form(form): Form<CustomerForm>,
) -> Result<Response, AppError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(msg) => {
            return Ok(Redirect::to(&redirect_with_message(
                &format!("/customers/{id}/edit"),
                "error",
                &msg,
            ))
            .into_response());
        }
    };

    match CustomerRepository::new(state.pool()).update(id, &input).await {
        Ok(()) => Ok(Redirect::to(&redirect_with_message(
            "/customers",
            "success",
            "customer updated",
        ))
        .into_response()),
        Err(RepositoryError::Conflict(_)) => Ok(Redirect::to(&redirect_with_message(
            &format!("/customers/{id}/edit"),
            "error",
            "a customer with this email already exists",
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Delete a customer. Their orders survive and render without a name.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_employee): RequireAuth,
    Path(id): Path<CustomerId>,
) -> Result<Response, AppError> {
    let deleted = CustomerRepository::new(state.pool()).delete(id).await?;

    let target = if deleted {
        redirect_with_message("/customers", "success", "customer deleted")
    } else {
        redirect_with_message("/customers", "error", "customer not found")
    };

    Ok(Redirect::to(&target).into_response())
}
