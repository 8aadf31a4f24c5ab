//! Landing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentEmployee;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub employee: Option<CurrentEmployee>,
}

/// Display the landing page.
pub async fn home(OptionalAuth(employee): OptionalAuth) -> impl IntoResponse {
    HomeTemplate { employee }
}
