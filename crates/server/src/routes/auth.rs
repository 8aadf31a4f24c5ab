//! Authentication route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::filters;
use crate::middleware::{clear_current_employee, set_current_employee};
use crate::models::CurrentEmployee;
use crate::services::AuthService;
use crate::state::AppState;

use super::MessageQuery;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error,
        success: query.success,
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.username, &form.password).await {
        Ok(employee) => {
            let current = CurrentEmployee {
                id: employee.id,
                username: employee.username,
                role: employee.role,
            };

            if let Err(e) = set_current_employee(&session, &current).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/login?error=session").into_response();
            }

            tracing::info!(employee = %current.username, "employee logged in");
            Redirect::to("/dashboard").into_response()
        }
        Err(e) => {
            tracing::warn!(username = %form.username, "Login failed: {}", e);
            Redirect::to("/login?error=credentials").into_response()
        }
    }
}

/// Handle logout.
///
/// Clears the session entirely.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_employee(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    Redirect::to("/login").into_response()
}
