//! Dashboard Routes
//!
//! - GET / - Redirect to the dashboard
//! - GET /dashboard - Metrics page (smart response)
//! - POST /api/refresh - "Last updated" fragment

use askama::Template;
use axum::response::{Html, Redirect, Response};
use chrono::Utc;

use crate::ui::{DashboardView, RefreshView};
use crate::web::error::WebResult;
use crate::web::render::RenderContext;

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

/// GET /dashboard
pub async fn dashboard_page(ctx: RenderContext) -> WebResult<Response> {
    let fragment = DashboardView::new().render()?;
    ctx.respond("Dashboard", fragment)
}

/// POST /api/refresh
///
/// Stamps the metrics area with the current server time.
pub async fn refresh() -> WebResult<Html<String>> {
    let now = Utc::now();
    tracing::debug!(at = %now, "Metrics refresh requested");
    Ok(Html(RefreshView::at(now).render()?))
}
