//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::db::analytics::{self, DashboardStats};
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::CurrentEmployee;
use crate::state::AppState;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub employee: CurrentEmployee,
    pub stats: DashboardStats,
}

/// Display the dashboard.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(employee): RequireAuth,
) -> Result<Response, AppError> {
    let stats = analytics::dashboard_stats(state.pool()).await?;

    Ok(DashboardTemplate { employee, stats }.into_response())
}
